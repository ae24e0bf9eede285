use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Algorithms,
    DataStructures,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Algorithms, Category::DataStructures];

    pub fn label(self) -> &'static str {
        match self {
            Category::Algorithms => "Algorithms",
            Category::DataStructures => "Data Structures",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    pub id: &'static str,
    pub front: &'static str,
    pub back: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
}

pub fn sample_flashcards() -> Vec<Flashcard> {
    vec![
        Flashcard {
            id: "1",
            front: "What is Big O Notation?",
            back: "Big O notation is a mathematical notation that describes the limiting behavior of a \
                   function when the argument tends towards a particular value or infinity. In computer \
                   science, it's used to classify algorithms according to how their run time or space \
                   requirements grow as the input size grows.",
            category: Category::Algorithms,
            difficulty: Difficulty::Medium,
        },
        Flashcard {
            id: "2",
            front: "What is a Stack data structure?",
            back: "A stack is a linear data structure that follows the Last In First Out (LIFO) \
                   principle. The last item to be inserted is the first one to be deleted. Basic \
                   operations include push (insert) and pop (remove).",
            category: Category::DataStructures,
            difficulty: Difficulty::Easy,
        },
        Flashcard {
            id: "3",
            front: "What is a Queue data structure?",
            back: "A queue is a linear data structure that follows the First In First Out (FIFO) \
                   principle. The first item to be inserted is the first one to be deleted. Basic \
                   operations include enqueue (insert) and dequeue (remove).",
            category: Category::DataStructures,
            difficulty: Difficulty::Easy,
        },
        Flashcard {
            id: "4",
            front: "What is a Binary Search Tree?",
            back: "A binary search tree is a node-based binary tree data structure that has the \
                   following properties: The left subtree of a node contains only nodes with keys \
                   lesser than the node's key. The right subtree of a node contains only nodes with \
                   keys greater than the node's key.",
            category: Category::DataStructures,
            difficulty: Difficulty::Hard,
        },
        Flashcard {
            id: "5",
            front: "What is the time complexity of quicksort?",
            back: "The average time complexity of quicksort is O(n log n), where n is the number of \
                   items being sorted. In the worst case, it's O(n²), but this is rare with good \
                   pivot selection strategies.",
            category: Category::Algorithms,
            difficulty: Difficulty::Medium,
        },
    ]
}
