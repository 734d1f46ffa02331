//! Error types for tree and selection operations
//!
//! Every variant is fatal to the operation that produced it: nothing is
//! retried and the tree is left untouched.

use thiserror::Error;

use crate::model::NodeId;

/// Result type alias for browser operations
pub type BrowserResult<T> = Result<T, BrowserError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    /// A path segment has no matching child
    #[error("There are no folders with name \"{0}\"")]
    PathNotFound(String),

    /// Move source is not among the folder's children
    #[error("item \"{name}\" not found in source folder")]
    SourceNotFound { name: String },

    /// Operation needs a children sequence and the node has none
    #[error("node \"{name}\" is not a folder")]
    NotAFolder { name: String },

    /// Move target is the moved node itself or lies inside it
    #[error("cannot move \"{name}\" into itself")]
    InvalidMoveTarget { name: String },

    /// Handle does not belong to this tree
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// No usable "Open" entry in the item commands
    #[error("Open command is not a function!")]
    OpenCommandMissing,
}
