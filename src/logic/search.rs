//! Search Logic
//!
//! Pure functions for filtering folder listings by search queries.
//! Supports wildcard patterns using the glob crate.

use crate::model::{NodeId, ProjectTree};

/// Match a search query against an item name
///
/// # Pattern Rules
/// - "*" and "?" wildcards via glob
/// - Matches are case-insensitive
/// - Without a full glob match, a plain substring match is enough
///
/// # Examples
/// ```
/// use project_browser::logic::search::search_matches;
///
/// assert!(search_matches("span", "Main Span"));
/// assert!(search_matches("*-2024", "bridge-2024"));
/// assert!(!search_matches("tower", "Main Span"));
/// ```
pub fn search_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true; // Empty query matches everything
    }

    let query_lower = query.to_lowercase();
    let name_lower = name.to_lowercase();

    if let Ok(pattern) = glob::Pattern::new(&query_lower) {
        if pattern.matches(&name_lower) {
            return true;
        }
    }

    // Fallback: substring match (also covers invalid glob patterns)
    name_lower.contains(&query_lower)
}

/// Keep only the handles whose node name matches `query`, order preserved
pub fn filter_nodes(tree: &ProjectTree, ids: &[NodeId], query: &str) -> Vec<NodeId> {
    if query.is_empty() {
        return ids.to_vec();
    }

    ids.iter()
        .copied()
        .filter(|id| {
            tree.get(*id)
                .is_some_and(|node| search_matches(query, &node.name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn test_empty_query_matches_all() {
        assert!(search_matches("", "anything"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(search_matches("SPAN", "main span"));
        assert!(search_matches("span", "MAIN SPAN"));
    }

    #[test]
    fn test_wildcards() {
        assert!(search_matches("b*e", "bridge"));
        assert!(search_matches("pier-?", "Pier-7"));
        assert!(!search_matches("b*x", "bridge"));
    }

    #[test]
    fn test_invalid_glob_falls_back_to_substring() {
        assert!(search_matches("[abc", "x[abc]y"));
        assert!(!search_matches("[abc", "nothing"));
    }

    #[test]
    fn test_filter_nodes_keeps_order() {
        let mut tree = ProjectTree::new("root");
        let root = tree.root();
        let a = tree.append_child(root, Node::item("jeff-1", "1"));
        let _b = tree.append_child(root, Node::item("other", "2"));
        let c = tree.append_child(root, Node::item("jeff-2", "3"));

        let all = tree.children_of(root).to_vec();
        assert_eq!(filter_nodes(&tree, &all, "jeff"), vec![a, c]);
        assert_eq!(filter_nodes(&tree, &all, ""), all);
    }
}
