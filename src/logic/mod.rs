//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and display messages
//! - formatting: Dates and name truncation for display
//! - navigation: Cursor movement and range walks
//! - path: Tree path resolution and path-scoped mutation
//! - search: Name filtering with wildcard patterns
//! - sorting: Node comparison for the sort keys
//! - uri: Project id <-> uri mapping

pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod path;
pub mod search;
pub mod sorting;
pub mod uri;
