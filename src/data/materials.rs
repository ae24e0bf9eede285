//! The study-material tree: folders, files, and the quizzes embedded in files.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Doc,
    Ppt,
    Other,
}

impl FileType {
    pub fn label(self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Doc => "DOC",
            FileType::Ppt => "PPT",
            FileType::Other => "FILE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: Vec<&'static str>,
    /// Index into `options`.
    pub correct_answer: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialFile {
    pub id: &'static str,
    pub name: &'static str,
    pub file_type: FileType,
    pub size: &'static str,
    pub last_modified: NaiveDate,
    pub summary: Option<&'static str>,
    pub content: Vec<&'static str>,
    pub quiz: Option<Quiz>,
}

impl MaterialFile {
    /// File name without its extension (`Algorithms.pdf` -> `Algorithms`).
    pub fn title(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem,
            _ => self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: &'static str,
    pub name: &'static str,
    pub children: Vec<MaterialNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaterialNode {
    Folder(Folder),
    File(MaterialFile),
}

impl MaterialNode {
    pub fn id(&self) -> &'static str {
        match self {
            MaterialNode::Folder(f) => f.id,
            MaterialNode::File(f) => f.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MaterialNode::Folder(f) => f.name,
            MaterialNode::File(f) => f.name,
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn sample_materials() -> Vec<MaterialNode> {
    vec![
        MaterialNode::Folder(Folder {
            id: "folder1",
            name: "Computer Science",
            children: vec![
                MaterialNode::File(MaterialFile {
                    id: "file1",
                    name: "Data Structures.pdf",
                    file_type: FileType::Pdf,
                    size: "2.4 MB",
                    last_modified: date(2023, 4, 15),
                    summary: Some(
                        "This document covers fundamental data structures including arrays, linked \
                         lists, stacks, queues, trees, and graphs. It explains their implementations, \
                         time complexities, and use cases.",
                    ),
                    content: vec![
                        "Chapter 1: Introduction to Data Structures",
                        "Chapter 2: Arrays and Linked Lists",
                        "Chapter 3: Stacks and Queues",
                        "Chapter 4: Trees and Graphs",
                        "Chapter 5: Hash Tables",
                    ],
                    quiz: Some(Quiz {
                        id: "quiz1",
                        title: "Data Structures Quiz",
                        questions: vec![
                            Question {
                                id: "q1",
                                text: "Which data structure follows the Last In First Out (LIFO) principle?",
                                options: vec!["Queue", "Stack", "Linked List", "Array"],
                                correct_answer: 1,
                            },
                            Question {
                                id: "q2",
                                text: "What is the time complexity of searching an element in a binary \
                                       search tree in the worst case?",
                                options: vec!["O(1)", "O(log n)", "O(n)", "O(n²)"],
                                correct_answer: 2,
                            },
                            Question {
                                id: "q3",
                                text: "Which of the following is NOT a linear data structure?",
                                options: vec!["Array", "Linked List", "Queue", "Tree"],
                                correct_answer: 3,
                            },
                        ],
                    }),
                }),
                MaterialNode::File(MaterialFile {
                    id: "file2",
                    name: "Algorithms.pdf",
                    file_type: FileType::Pdf,
                    size: "3.1 MB",
                    last_modified: date(2023, 4, 20),
                    summary: Some(
                        "This document covers various algorithms including sorting, searching, graph \
                         algorithms, and dynamic programming. It analyzes their time and space \
                         complexities.",
                    ),
                    content: vec![
                        "Chapter 1: Introduction to Algorithms",
                        "Chapter 2: Sorting Algorithms",
                        "Chapter 3: Searching Algorithms",
                        "Chapter 4: Graph Algorithms",
                        "Chapter 5: Dynamic Programming",
                    ],
                    quiz: Some(Quiz {
                        id: "quiz2",
                        title: "Algorithms Quiz",
                        questions: vec![
                            Question {
                                id: "q1",
                                text: "What is the average time complexity of quicksort?",
                                options: vec!["O(1)", "O(log n)", "O(n log n)", "O(n²)"],
                                correct_answer: 2,
                            },
                            Question {
                                id: "q2",
                                text: "Which algorithm is used to find the shortest path in a weighted graph?",
                                options: vec![
                                    "Depth-First Search",
                                    "Breadth-First Search",
                                    "Dijkstra's Algorithm",
                                    "Binary Search",
                                ],
                                correct_answer: 2,
                            },
                        ],
                    }),
                }),
            ],
        }),
        MaterialNode::Folder(Folder {
            id: "folder2",
            name: "Mathematics",
            children: vec![
                MaterialNode::File(MaterialFile {
                    id: "file3",
                    name: "Calculus.pdf",
                    file_type: FileType::Pdf,
                    size: "4.2 MB",
                    last_modified: date(2023, 5, 10),
                    summary: Some(
                        "This document covers differential and integral calculus, including limits, \
                         derivatives, integrals, and their applications.",
                    ),
                    content: vec![
                        "Chapter 1: Limits and Continuity",
                        "Chapter 2: Derivatives",
                        "Chapter 3: Applications of Derivatives",
                        "Chapter 4: Integrals",
                        "Chapter 5: Applications of Integrals",
                    ],
                    quiz: None,
                }),
                MaterialNode::File(MaterialFile {
                    id: "file4",
                    name: "Linear Algebra.pdf",
                    file_type: FileType::Pdf,
                    size: "3.8 MB",
                    last_modified: date(2023, 5, 15),
                    summary: None,
                    content: Vec::new(),
                    quiz: None,
                }),
            ],
        }),
        MaterialNode::File(MaterialFile {
            id: "file5",
            name: "Study Tips.pdf",
            file_type: FileType::Pdf,
            size: "1.2 MB",
            last_modified: date(2023, 6, 1),
            summary: None,
            content: Vec::new(),
            quiz: None,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_ids(nodes: &[MaterialNode], out: &mut Vec<&'static str>) {
        for node in nodes {
            out.push(node.id());
            if let MaterialNode::Folder(folder) = node {
                collect_ids(&folder.children, out);
            }
        }
    }

    fn collect_quizzes(nodes: &[MaterialNode], out: &mut Vec<Quiz>) {
        for node in nodes {
            match node {
                MaterialNode::Folder(folder) => collect_quizzes(&folder.children, out),
                MaterialNode::File(file) => out.extend(file.quiz.clone()),
            }
        }
    }

    #[test]
    fn test_sample_ids_unique() {
        let mut ids = Vec::new();
        collect_ids(&sample_materials(), &mut ids);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_correct_answers_are_valid_options() {
        let mut quizzes = Vec::new();
        collect_quizzes(&sample_materials(), &mut quizzes);
        assert_eq!(quizzes.len(), 2);
        for quiz in quizzes {
            for q in &quiz.questions {
                assert!(q.correct_answer < q.options.len(), "{} / {}", quiz.id, q.id);
            }
        }
    }

    #[test]
    fn test_title_strips_extension() {
        let nodes = sample_materials();
        let MaterialNode::File(tips) = &nodes[2] else {
            panic!("expected a file");
        };
        assert_eq!(tips.title(), "Study Tips");

        let mut bare = tips.clone();
        bare.name = "README";
        assert_eq!(bare.title(), "README");
        bare.name = ".hidden";
        assert_eq!(bare.title(), ".hidden");
    }
}
