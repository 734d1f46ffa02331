//! Navigation Model
//!
//! This sub-model holds the folder path currently shown and the cursor
//! position in the displayed rows.

use crate::logic::path::to_path;

/// Navigation state (current folder path, cursor)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationModel {
    /// Folder names from the root to the current folder
    pub path: Vec<String>,

    /// Cursor row in the display list
    pub cursor: Option<usize>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breadcrumb string for the current folder
    pub fn breadcrumb(&self) -> String {
        to_path(self.path.as_slice())
    }

    pub fn at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Descend into a child folder; the cursor resets
    pub fn push(&mut self, name: impl Into<String>) {
        self.path.push(name.into());
        self.cursor = None;
    }

    /// Go back to the parent folder, returning the folder left
    pub fn pop(&mut self) -> Option<String> {
        let left = self.path.pop();
        if left.is_some() {
            self.cursor = None;
        }
        left
    }
}
