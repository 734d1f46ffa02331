//! Browser Model
//!
//! This module defines the state behind the project browser. The model is
//! organized into focused sub-models:
//!
//! - **ProjectTree**: the folder/item hierarchy (arena of nodes)
//! - **NavigationModel**: current folder path and cursor
//! - **UiModel**: sort and display preferences
//! - **MultiSelection / SingleSelection**: selected items by handle
//!
//! All state lives here and is mutated synchronously by UI event handlers.
//! No I/O happens in the model.

pub mod commands;
pub mod navigation;
pub mod selection;
pub mod tree;
pub mod types;
pub mod ui;

pub use commands::{ItemCommand, ItemCommands};
pub use navigation::NavigationModel;
pub use selection::{MultiSelection, SingleSelection};
pub use tree::ProjectTree;
pub use types::*;
pub use ui::UiModel;

use tracing::debug;

use crate::error::{BrowserError, BrowserResult};
use crate::logic;

/// Root browser model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct BrowserModel {
    /// Folder/item hierarchy
    pub tree: ProjectTree,

    /// Current folder and cursor
    pub navigation: NavigationModel,

    /// Sort and display preferences
    pub ui: UiModel,

    /// Selected items
    pub selection: MultiSelection,

    /// Active search query (empty = no filter)
    pub search_query: String,
}

impl BrowserModel {
    pub fn new(tree: ProjectTree, ui: UiModel) -> Self {
        Self {
            tree,
            navigation: NavigationModel::new(),
            ui,
            selection: MultiSelection::new(),
            search_query: String::new(),
        }
    }

    /// Handle of the folder currently shown
    pub fn current_folder(&self) -> BrowserResult<NodeId> {
        logic::path::resolve(&self.tree, self.navigation.path.as_slice())
    }

    /// Rows currently rendered: children of the current folder, filtered by
    /// the search query and sorted by the UI preferences
    pub fn display_list(&self) -> BrowserResult<Vec<NodeId>> {
        let children = logic::path::list_children(&self.tree, self.navigation.path.as_slice())?;
        let mut rows = logic::search::filter_nodes(&self.tree, children, &self.search_query);
        logic::sorting::sort_nodes(
            &self.tree,
            &mut rows,
            self.ui.sort_by,
            self.ui.sort_direction,
        );
        Ok(rows)
    }

    /// Open the child folder `name` of the current folder
    pub fn enter(&mut self, name: &str) -> BrowserResult<()> {
        let folder = self.current_folder()?;
        let child = self
            .tree
            .child_by_name(folder, name)
            .ok_or_else(|| BrowserError::PathNotFound(name.to_string()))?;

        if self.tree.node(child)?.children().is_none() {
            return Err(BrowserError::NotAFolder {
                name: name.to_string(),
            });
        }

        self.navigation.push(name);
        debug!("Entered {}", self.navigation.breadcrumb());
        Ok(())
    }

    /// Go back to the parent folder; false when already at the root
    pub fn go_up(&mut self) -> bool {
        let left = self.navigation.pop();
        if left.is_some() {
            debug!("Back to {}", self.navigation.breadcrumb());
        }
        left.is_some()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.navigation.cursor = None;
    }

    /// Plain click on a display row: select only that item
    pub fn click_row(&mut self, index: usize) -> BrowserResult<()> {
        if let Some(&item) = self.display_list()?.get(index) {
            self.selection.select_only(item);
            self.navigation.cursor = Some(index);
        }
        Ok(())
    }

    /// Ctrl-click on a display row: toggle that item in the selection
    pub fn toggle_row(&mut self, index: usize) -> BrowserResult<()> {
        if let Some(&item) = self.display_list()?.get(index) {
            if self.selection.is_selected(item) {
                self.selection.remove(item);
            } else {
                self.selection.add(item);
            }
            self.navigation.cursor = Some(index);
        }
        Ok(())
    }

    /// Shift-click on a display row: extend the selection to it
    pub fn extend_to_row(&mut self, index: usize) -> BrowserResult<()> {
        let rows = self.display_list()?;
        self.selection.select_range(&rows, index);
        if index < rows.len() {
            self.navigation.cursor = Some(index);
        }
        Ok(())
    }

    /// Move the cursor down one row, wrapping at the end
    pub fn cursor_down(&mut self) -> BrowserResult<()> {
        let len = self.display_list()?.len();
        self.navigation.cursor = logic::navigation::next_selection(self.navigation.cursor, len);
        Ok(())
    }

    /// Move the cursor up one row, wrapping at the start
    pub fn cursor_up(&mut self) -> BrowserResult<()> {
        let len = self.display_list()?.len();
        self.navigation.cursor = logic::navigation::prev_selection(self.navigation.cursor, len);
        Ok(())
    }
}
