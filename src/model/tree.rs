//! Project tree arena
//!
//! The tree owns every node; everything else refers to nodes through
//! [`NodeId`] handles. Nodes are never freed, moves only re-link handles, so
//! a handle stays valid for the life of the tree.

use super::types::{Node, NodeId};
use crate::api::ListingNode;
use crate::error::{BrowserError, BrowserResult};

#[derive(Debug, Clone)]
pub struct ProjectTree {
    /// All nodes indexed by handle
    nodes: Vec<Node>,
    /// Parent of each node (None for root)
    parents: Vec<Option<NodeId>>,
    root: NodeId,
}

impl ProjectTree {
    /// Create a tree holding only an empty root folder
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::folder(root_name)],
            parents: vec![None],
            root: NodeId::new(0),
        }
    }

    /// Build a tree from a project listing
    ///
    /// Listing entries without uri and id become folders even when the
    /// listing omits their `children`. Children listed under an item are
    /// ignored.
    pub fn from_listing(listing: ListingNode) -> Self {
        let mut tree = Self::new(listing.name);
        let root = tree.root;
        tree.nodes[0].modified = listing.modified;

        // Depth-first, children keep listing order
        let mut pending: Vec<(NodeId, Vec<ListingNode>)> =
            vec![(root, listing.children.unwrap_or_default())];
        while let Some((parent, children)) = pending.pop() {
            for child in children {
                let mut node = Node::folder(child.name);
                node.uri = child.uri;
                node.id = child.id;
                node.modified = child.modified;

                let is_folder = node.is_folder();
                let id = tree.append_child(parent, node);
                if let Some(grandchildren) = child.children.filter(|_| is_folder) {
                    pending.push((id, grandchildren));
                }
            }
        }

        tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Like [`get`](Self::get) but reports unknown handles as an error
    pub fn node(&self, id: NodeId) -> BrowserResult<&Node> {
        self.get(id).ok_or(BrowserError::UnknownNode(id))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.index()).copied().flatten()
    }

    /// Children of a node, empty for items and unknown handles
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).and_then(Node::children).unwrap_or(&[])
    }

    /// First child with the given name
    pub fn child_by_name(&self, folder: NodeId, name: &str) -> Option<NodeId> {
        self.children_of(folder)
            .iter()
            .copied()
            .find(|child| self.get(*child).is_some_and(|node| node.name == name))
    }

    /// Check whether `ancestor` is `id` itself or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// All nodes below `id` in depth-first order, `id` excluded
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children_of(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children_of(next).iter().rev().copied());
        }
        out
    }

    /// Number of nodes reachable from the root, root included
    pub fn reachable_count(&self) -> usize {
        self.descendants(self.root).len() + 1
    }

    /// Append a node as last child of `parent`
    ///
    /// The node arrives with no children of its own: an empty sequence if it
    /// is a folder, none otherwise. Callers check that `parent` is a folder;
    /// the node is allocated either way.
    pub(crate) fn append_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.reset_children();
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(Some(parent));
        if let Some(children) = self.get_mut(parent).and_then(Node::children_mut) {
            children.push(id);
        }
        id
    }

    /// Detach the child at `position` of `folder` and append it to `target`
    pub(crate) fn relocate(
        &mut self,
        folder: NodeId,
        position: usize,
        target: NodeId,
    ) -> Option<NodeId> {
        let children = self.get_mut(folder)?.children_mut()?;
        if position >= children.len() {
            return None;
        }
        let moved = children.remove(position);
        if let Some(children) = self.get_mut(target).and_then(Node::children_mut) {
            children.push(moved);
        }
        self.parents[moved.index()] = Some(target);
        Some(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(json: &str) -> ListingNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_new_tree_has_empty_root_folder() {
        let tree = ProjectTree::new("root");
        let root = tree.get(tree.root()).unwrap();
        assert!(root.is_folder());
        assert!(tree.children_of(tree.root()).is_empty());
        assert_eq!(tree.reachable_count(), 1);
    }

    #[test]
    fn test_from_listing_keeps_order_and_kinds() {
        let tree = ProjectTree::from_listing(listing(
            r#"{
                "name": "root",
                "children": [
                    {"name": "Bridges", "children": [
                        {"name": "Span", "uri": "/api/projects/7", "id": "7"}
                    ]},
                    {"name": "Empty"},
                    {"name": "Tower", "uri": "/api/projects/9", "id": "9", "modified": 1700000000}
                ]
            }"#,
        ));

        let names: Vec<_> = tree
            .children_of(tree.root())
            .iter()
            .map(|id| tree.get(*id).unwrap().name.clone())
            .collect();
        assert_eq!(names, vec!["Bridges", "Empty", "Tower"]);

        let empty = tree.child_by_name(tree.root(), "Empty").unwrap();
        assert_eq!(tree.get(empty).unwrap().children(), Some(&[][..]));

        let tower = tree.child_by_name(tree.root(), "Tower").unwrap();
        assert!(tree.get(tower).unwrap().children().is_none());

        let bridges = tree.child_by_name(tree.root(), "Bridges").unwrap();
        let span = tree.child_by_name(bridges, "Span").unwrap();
        assert_eq!(tree.parent(span), Some(bridges));
        assert_eq!(tree.reachable_count(), 5);
    }

    #[test]
    fn test_from_listing_ignores_children_of_items() {
        let tree = ProjectTree::from_listing(listing(
            r#"{
                "name": "root",
                "children": [
                    {"name": "Span", "uri": "/api/projects/7", "id": "7", "children": [
                        {"name": "Stray", "uri": "/api/projects/8", "id": "8"}
                    ]}
                ]
            }"#,
        ));

        let span = tree.child_by_name(tree.root(), "Span").unwrap();
        assert!(tree.get(span).unwrap().children().is_none());
        assert_eq!(tree.reachable_count(), 2);
    }

    #[test]
    fn test_from_listing_fractional_modified() {
        let tree = ProjectTree::from_listing(listing(
            r#"{"name": "root", "children": [
                {"name": "Span", "uri": "/api/projects/7", "id": "7", "modified": 1700000000.5}
            ]}"#,
        ));

        let span = tree.child_by_name(tree.root(), "Span").unwrap();
        let modified = tree.get(span).unwrap().modified.as_ref().unwrap();
        assert_eq!(modified.to_datetime().map(|dt| dt.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_append_child_drops_foreign_handles() {
        let mut tree = ProjectTree::new("root");
        let existing = tree.append_child(tree.root(), Node::item("Span", "7"));

        let mut looped = Node::folder("Loop");
        looped.children = Some(vec![tree.root(), existing]);
        let looped = tree.append_child(tree.root(), looped);

        assert!(tree.children_of(looped).is_empty());
        assert_eq!(tree.descendants(tree.root()), vec![existing, looped]);
    }

    #[test]
    fn test_append_child_gives_bare_folder_children() {
        let mut tree = ProjectTree::new("root");
        let mut bare = Node::item("F", "1");
        bare.uri = None;
        bare.id = None;
        let bare = tree.append_child(tree.root(), bare);

        assert_eq!(tree.get(bare).unwrap().children(), Some(&[][..]));

        let mut tagged = Node::folder("Span");
        tagged.id = Some("42".to_string());
        let tagged = tree.append_child(tree.root(), tagged);
        assert!(tree.get(tagged).unwrap().children().is_none());
    }

    #[test]
    fn test_descendants_depth_first() {
        let mut tree = ProjectTree::new("root");
        let a = tree.append_child(tree.root(), Node::folder("a"));
        let a1 = tree.append_child(a, Node::item("a1", "1"));
        let b = tree.append_child(tree.root(), Node::item("b", "2"));
        assert_eq!(tree.descendants(tree.root()), vec![a, a1, b]);
    }

    #[test]
    fn test_is_ancestor_or_self() {
        let mut tree = ProjectTree::new("root");
        let a = tree.append_child(tree.root(), Node::folder("a"));
        let b = tree.append_child(a, Node::folder("b"));
        assert!(tree.is_ancestor_or_self(a, b));
        assert!(tree.is_ancestor_or_self(b, b));
        assert!(!tree.is_ancestor_or_self(b, a));
    }

    #[test]
    fn test_unknown_handle() {
        let tree = ProjectTree::new("root");
        let other = {
            let mut t = ProjectTree::new("other");
            t.append_child(t.root(), Node::folder("x"))
        };
        assert_eq!(tree.node(other), Err(BrowserError::UnknownNode(other)));
        assert!(tree.children_of(other).is_empty());
    }
}
