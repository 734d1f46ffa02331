//! Shared types for the Model
//!
//! These types are used across the tree, the selection state and the
//! sorting/formatting logic.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::uri::id_to_uri;

/// Opaque handle to a node owned by a [`ProjectTree`](super::ProjectTree)
///
/// Handles are the identity used by the selection state: two nodes with the
/// same name and uri are still distinct handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Modification time as reported by the project listing
///
/// The listing emits either unix seconds (possibly fractional) or an
/// ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(i64),
    FractionalSeconds(f64),
    Text(String),
}

impl Timestamp {
    /// Convert to a UTC datetime, `None` if the value cannot be interpreted
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Seconds(secs) => DateTime::from_timestamp(*secs, 0),
            Timestamp::FractionalSeconds(secs) => {
                if !secs.is_finite() {
                    return None;
                }
                let whole = secs.floor();
                let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
                DateTime::from_timestamp(whole as i64, nanos)
            }
            Timestamp::Text(text) => {
                if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                    return Some(dt.with_timezone(&Utc));
                }
                // Listings written without an offset are taken as UTC
                ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                    .map(|naive| naive.and_utc())
            }
        }
    }
}

/// A folder or a project item in the browser tree
///
/// A node is a folder iff it has neither `uri` nor `id`. Folders carry a
/// `children` sequence, items don't. The sequence is owned by the tree:
/// it is reset when the node is attached, so handles can't be aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub uri: Option<String>,
    pub id: Option<String>,
    pub modified: Option<Timestamp>,
    pub(super) children: Option<Vec<NodeId>>,
}

impl Node {
    /// Create an empty folder
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            id: None,
            modified: None,
            children: Some(Vec::new()),
        }
    }

    /// Create a project item; its uri is derived from the project id
    pub fn item(name: impl Into<String>, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: name.into(),
            uri: Some(id_to_uri(&id)),
            id: Some(id),
            modified: None,
            children: None,
        }
    }

    pub fn with_modified(mut self, modified: Timestamp) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn is_folder(&self) -> bool {
        self.uri.is_none() && self.id.is_none()
    }

    /// Child handles, `None` for items
    pub fn children(&self) -> Option<&[NodeId]> {
        self.children.as_deref()
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        self.children.as_mut()
    }

    /// Drop any child handles and match the sequence to the node kind
    pub(crate) fn reset_children(&mut self) {
        self.children = self.is_folder().then(Vec::new);
    }

    /// Structural match on `(name, uri)`, used to locate move sources
    pub fn same_entry(&self, other: &Node) -> bool {
        self.name == other.name && self.uri == other.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_and_item_kinds() {
        let folder = Node::folder("Bridges");
        assert!(folder.is_folder());
        assert_eq!(folder.children(), Some(&[][..]));

        let item = Node::item("Span", "42");
        assert!(!item.is_folder());
        assert_eq!(item.uri.as_deref(), Some("/api/projects/42"));
        assert!(item.children().is_none());
    }

    #[test]
    fn test_same_entry_ignores_id_and_modified() {
        let a = Node::item("Span", "42");
        let mut b = a.clone().with_modified(Timestamp::Seconds(10));
        b.id = Some("other".to_string());
        assert!(a.same_entry(&b));

        let c = Node::item("Span", "43");
        assert!(!a.same_entry(&c));
    }

    #[test]
    fn test_timestamp_seconds() {
        let ts = Timestamp::Seconds(86400);
        assert_eq!(
            ts.to_datetime().map(|dt| dt.to_rfc3339()),
            Some("1970-01-02T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_timestamp_text_formats() {
        let with_offset = Timestamp::Text("2024-03-01T12:00:00+02:00".to_string());
        let naive = Timestamp::Text("2024-03-01T10:00:00".to_string());
        assert_eq!(with_offset.to_datetime(), naive.to_datetime());
        assert!(with_offset.to_datetime().is_some());
    }

    #[test]
    fn test_timestamp_garbage() {
        assert!(Timestamp::Text("yesterday".to_string()).to_datetime().is_none());
    }

    #[test]
    fn test_timestamp_deserialize_untagged() {
        let ts: Timestamp = serde_json::from_str("1700000000").unwrap();
        assert_eq!(ts, Timestamp::Seconds(1_700_000_000));
        let ts: Timestamp = serde_json::from_str("\"2024-01-01T00:00:00Z\"").unwrap();
        assert_eq!(ts, Timestamp::Text("2024-01-01T00:00:00Z".to_string()));
    }

    #[test]
    fn test_timestamp_fractional_seconds() {
        let ts: Timestamp = serde_json::from_str("1700000000.5").unwrap();
        assert_eq!(ts, Timestamp::FractionalSeconds(1_700_000_000.5));

        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_timestamp_negative_fraction_rounds_down() {
        let dt = Timestamp::FractionalSeconds(-0.25).to_datetime().unwrap();
        assert_eq!(dt.timestamp(), -1);
        assert_eq!(dt.timestamp_subsec_millis(), 750);
    }

    #[test]
    fn test_reset_children_follows_kind() {
        let mut folder = Node::folder("Loop");
        folder.children = Some(vec![NodeId::new(0)]);
        folder.reset_children();
        assert_eq!(folder.children(), Some(&[][..]));

        let mut item = Node::folder("Span");
        item.id = Some("42".to_string());
        item.reset_children();
        assert!(item.children().is_none());

        let mut bare = Node::item("F", "1");
        bare.id = None;
        bare.uri = None;
        bare.reset_children();
        assert_eq!(bare.children(), Some(&[][..]));
    }
}
