//! Study-material browser: folder tree, file content, embedded quiz.

use super::quiz::{QuizScore, QuizSession};
use crate::app::state::{InputOutcome, InputState};
use crate::data::materials::{sample_materials, MaterialFile, MaterialNode};
use crossterm::event::KeyEvent;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialsMode {
    Files,
    Content,
    Quiz,
}

/// One visible line of the file tree.
#[derive(Debug, Clone, Copy)]
pub struct MaterialRow<'a> {
    pub depth: usize,
    pub node: &'a MaterialNode,
    pub expanded: bool,
}

/// Depth-first rows of `nodes`, descending only into expanded folders.
pub fn visible_rows<'a>(nodes: &'a [MaterialNode], expanded: &HashSet<&'static str>) -> Vec<MaterialRow<'a>> {
    fn walk<'a>(
        nodes: &'a [MaterialNode],
        depth: usize,
        expanded: &HashSet<&'static str>,
        out: &mut Vec<MaterialRow<'a>>,
    ) {
        for node in nodes {
            let is_open = expanded.contains(node.id());
            out.push(MaterialRow {
                depth,
                node,
                expanded: is_open,
            });
            if let MaterialNode::Folder(folder) = node {
                if is_open {
                    walk(&folder.children, depth + 1, expanded, out);
                }
            }
        }
    }

    let mut rows = Vec::new();
    walk(nodes, 0, expanded, &mut rows);
    rows
}

/// Files anywhere in the tree whose name contains `query`, ignoring case.
pub fn search_files<'a>(nodes: &'a [MaterialNode], query: &str) -> Vec<MaterialRow<'a>> {
    fn walk<'a>(nodes: &'a [MaterialNode], needle: &str, out: &mut Vec<MaterialRow<'a>>) {
        for node in nodes {
            match node {
                MaterialNode::Folder(folder) => walk(&folder.children, needle, out),
                MaterialNode::File(file) => {
                    if file.name.to_lowercase().contains(needle) {
                        out.push(MaterialRow {
                            depth: 0,
                            node,
                            expanded: false,
                        });
                    }
                }
            }
        }
    }

    let needle = query.to_lowercase();
    let mut rows = Vec::new();
    walk(nodes, &needle, &mut rows);
    rows
}

#[derive(Debug)]
pub struct MaterialsSection {
    tree: Vec<MaterialNode>,
    pub expanded: HashSet<&'static str>,
    pub search: InputState,
    pub selected_row: usize,
    pub mode: MaterialsMode,
    pub open_file: Option<MaterialFile>,
    pub quiz: QuizSession,
    pub last_score: Option<QuizScore>,
}

impl MaterialsSection {
    pub fn new() -> Self {
        Self::with_tree(sample_materials())
    }

    /// The first top-level folder starts expanded.
    pub fn with_tree(tree: Vec<MaterialNode>) -> Self {
        let expanded = tree
            .iter()
            .find(|n| matches!(n, MaterialNode::Folder(_)))
            .map(|n| n.id())
            .into_iter()
            .collect();
        Self {
            tree,
            expanded,
            search: InputState::new(),
            selected_row: 0,
            mode: MaterialsMode::Files,
            open_file: None,
            quiz: QuizSession::new(0),
            last_score: None,
        }
    }

    pub fn rows(&self) -> Vec<MaterialRow<'_>> {
        if self.search.is_blank() {
            visible_rows(&self.tree, &self.expanded)
        } else {
            search_files(&self.tree, self.search.text.trim())
        }
    }

    pub fn edit_search(&mut self, key: KeyEvent) -> InputOutcome {
        let outcome = self.search.handle_key(key);
        if outcome == InputOutcome::Changed {
            self.selected_row = 0;
        }
        outcome
    }

    pub fn select_next(&mut self) {
        if self.selected_row + 1 < self.rows().len() {
            self.selected_row += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn toggle_folder(&mut self, folder_id: &'static str) {
        if !self.expanded.remove(folder_id) {
            self.expanded.insert(folder_id);
        }
        let len = self.rows().len();
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    /// Toggle the selected folder or open the selected file.
    pub fn activate_selected(&mut self) {
        let target = self.rows().get(self.selected_row).map(|row| match row.node {
            MaterialNode::Folder(folder) => Err(folder.id),
            MaterialNode::File(file) => Ok(file.clone()),
        });
        match target {
            Some(Err(folder_id)) => self.toggle_folder(folder_id),
            Some(Ok(file)) => self.open(file),
            None => {}
        }
    }

    /// Show a file's content with a fresh quiz state.
    pub fn open(&mut self, file: MaterialFile) {
        let questions = file.quiz.as_ref().map(|q| q.questions.len()).unwrap_or(0);
        tracing::debug!(file = file.id, "open material");
        self.quiz = QuizSession::new(questions);
        self.last_score = None;
        self.open_file = Some(file);
        self.mode = MaterialsMode::Content;
    }

    pub fn has_quiz(&self) -> bool {
        self.open_file.as_ref().is_some_and(|f| f.quiz.is_some())
    }

    pub fn start_quiz(&mut self) -> bool {
        if self.has_quiz() {
            self.mode = MaterialsMode::Quiz;
            true
        } else {
            false
        }
    }

    pub fn back_to_files(&mut self) {
        self.mode = MaterialsMode::Files;
    }

    pub fn back_to_content(&mut self) {
        if self.open_file.is_some() {
            self.mode = MaterialsMode::Content;
        }
    }

    pub fn current_option_count(&self) -> usize {
        self.open_file
            .as_ref()
            .and_then(|f| f.quiz.as_ref())
            .and_then(|q| q.questions.get(self.quiz.current))
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    pub fn select_answer(&mut self, option: usize) {
        let count = self.current_option_count();
        self.quiz.select(option, count);
    }

    pub fn submit_quiz(&mut self) -> Option<QuizScore> {
        let quiz = self.open_file.as_ref()?.quiz.as_ref()?;
        let result = self.quiz.submit(&quiz.questions)?;
        tracing::info!(
            quiz = quiz.id,
            correct = result.correct,
            total = result.total,
            "quiz submitted"
        );
        self.last_score = Some(result);
        Some(result)
    }

    pub fn retake_quiz(&mut self) {
        self.quiz.reset();
        self.last_score = None;
    }
}
