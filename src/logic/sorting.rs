//! Sorting comparison logic
//!
//! Pure functions for comparing tree nodes across the sort keys.

use std::cmp::Ordering;

use crate::model::{Node, NodeId, ProjectTree};
use crate::{SortBy, SortDirection};

/// Compare two nodes according to the given sort key and direction
///
/// # Sort Rules
/// - Folders come before items
/// - Within the same kind, apply the sort key
/// - `Desc` reverses the whole ordering, folder placement included
pub fn compare_nodes(a: &Node, b: &Node, sort_by: SortBy, direction: SortDirection) -> Ordering {
    let result = match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match sort_by {
            SortBy::Name => compare_names(&a.name, &b.name),
            SortBy::Modified => {
                // Missing or unreadable timestamps sort as oldest
                let a_time = a.modified.as_ref().and_then(|m| m.to_datetime());
                let b_time = b.modified.as_ref().and_then(|m| m.to_datetime());
                a_time.cmp(&b_time)
            }
        },
    };

    match direction {
        SortDirection::Asc => result,
        SortDirection::Desc => result.reverse(),
    }
}

/// Case-insensitive name order with an exact tie-break
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort of handles by the nodes they refer to
pub fn sort_nodes(
    tree: &ProjectTree,
    ids: &mut [NodeId],
    sort_by: SortBy,
    direction: SortDirection,
) {
    ids.sort_by(|a, b| match (tree.get(*a), tree.get(*b)) {
        (Some(a), Some(b)) => compare_nodes(a, b, sort_by, direction),
        _ => Ordering::Equal,
    });
}
