//! Project Browser Library
//!
//! UI state for a project browser: the folder/item tree, path addressing,
//! sorting, searching and selection. Exposes modules for the `pbrowse`
//! binary and for testing.

pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod utils;

use serde::Deserialize;

pub use error::{BrowserError, BrowserResult};

/// How the current folder is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayAs {
    #[default]
    Rows,  // One item per line with details
    Tiles, // Grid of project cards
}

/// Sort key for folder listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Name,     // Sort alphabetically
    Modified, // Sort by last modified time
}

impl SortBy {
    pub fn as_str(&self) -> &str {
        match self {
            SortBy::Name => "Name",
            SortBy::Modified => "Modified",
        }
    }
}

/// Sort direction for folder listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}
