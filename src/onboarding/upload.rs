//! The onboarding material list. Names are recorded only; files are never
//! opened, read or sent anywhere.

use crate::app::state::InputState;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Enter a file path to add")]
    Empty,
    #[error("PDF files only: {0}")]
    NotPdf(String),
}

#[derive(Debug, Default)]
pub struct UploadList {
    pub files: Vec<String>,
    pub input: InputState,
    pub selected: Option<usize>,
    pub error: Option<UploadError>,
}

impl UploadList {
    /// Append the file named in the input box and clear the box.
    pub fn add_from_input(&mut self) -> Result<(), UploadError> {
        let path = self.input.text.clone();
        let result = self.add(&path);
        match result {
            Ok(()) => {
                self.input.clear();
                self.error = None;
            }
            Err(ref e) => self.error = Some(e.clone()),
        }
        result
    }

    pub fn add(&mut self, path: &str) -> Result<(), UploadError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(UploadError::Empty);
        }
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        let is_pdf = Path::new(&name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(UploadError::NotPdf(name));
        }
        self.files.push(name);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.files.len() {
            return None;
        }
        let removed = self.files.remove(index);
        self.selected = match self.selected {
            _ if self.files.is_empty() => None,
            Some(sel) if sel >= self.files.len() => Some(self.files.len() - 1),
            other => other,
        };
        Some(removed)
    }

    pub fn remove_selected(&mut self) -> Option<String> {
        self.selected.and_then(|i| self.remove(i))
    }

    pub fn select_next(&mut self) {
        if self.files.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.files.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            // Moving up from the first file returns focus to the input box.
            _ => None,
        };
    }
}
