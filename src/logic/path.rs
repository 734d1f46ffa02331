//! Tree path addressing
//!
//! A path is the sequence of folder names from the root to a folder,
//! excluding the root's own name. Every mutation here resolves its path
//! first and leaves the tree untouched when anything fails.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{BrowserError, BrowserResult};
use crate::logic::uri::uri_to_id;
use crate::model::{Node, NodeId, ProjectTree};

/// Render a path as `/a/b/c`
///
/// # Examples
/// ```
/// use project_browser::logic::path::to_path;
///
/// assert_eq!(to_path(&["Bridges", "2024"]), "/Bridges/2024");
/// assert_eq!(to_path::<&str>(&[]), "/");
/// ```
pub fn to_path<S: AsRef<str>>(path: &[S]) -> String {
    let segments: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
    format!("/{}", segments.join("/"))
}

/// Walk `path` from the root and return the node it names
///
/// At each step the first child with a matching name wins. The result is
/// not necessarily a folder. An empty path names the root. A segment below
/// an item has nothing to match, so it reports `PathNotFound` for that
/// segment.
pub fn resolve<S: AsRef<str>>(tree: &ProjectTree, path: &[S]) -> BrowserResult<NodeId> {
    let mut current = tree.root();

    for segment in path {
        let segment = segment.as_ref();
        current = tree
            .child_by_name(current, segment)
            .ok_or_else(|| BrowserError::PathNotFound(segment.to_string()))?;
    }

    Ok(current)
}

/// Children of the folder at `path`
pub fn list_children<'a, S: AsRef<str>>(
    tree: &'a ProjectTree,
    path: &[S],
) -> BrowserResult<&'a [NodeId]> {
    let id = resolve(tree, path)?;
    folder_children(tree, id)
}

/// Append `node` as the last child of the folder at `path`
///
/// No duplicate-name check; use [`unique_name`] first when names must differ.
pub fn insert_at<S: AsRef<str>>(
    tree: &mut ProjectTree,
    path: &[S],
    node: Node,
) -> BrowserResult<NodeId> {
    let folder = resolve(tree, path)?;
    folder_children(tree, folder)?;

    debug!("Inserting {:?} at {}", node.name, to_path(path));
    Ok(tree.append_child(folder, node))
}

/// Move a child of the folder at `path` into `target`
///
/// The moved child is the first one whose `(name, uri)` equals the
/// source's, in stored order. When a folder holds several children with the
/// same name and uri this may be a different handle than `source`.
pub fn move_to<S: AsRef<str>>(
    tree: &mut ProjectTree,
    path: &[S],
    source: NodeId,
    target: NodeId,
) -> BrowserResult<()> {
    let folder = resolve(tree, path)?;
    let source_node = tree.node(source)?;
    let target_node = tree.node(target)?;

    if target_node.children().is_none() {
        return Err(BrowserError::NotAFolder {
            name: target_node.name.clone(),
        });
    }

    let position = folder_children(tree, folder)?
        .iter()
        .position(|child| tree.get(*child).is_some_and(|n| n.same_entry(source_node)))
        .ok_or_else(|| BrowserError::SourceNotFound {
            name: source_node.name.clone(),
        })?;

    let moved = folder_children(tree, folder)?[position];
    if tree.is_ancestor_or_self(moved, target) {
        return Err(BrowserError::InvalidMoveTarget {
            name: source_node.name.clone(),
        });
    }

    debug!(
        "Moving {:?} from {} to {}",
        source_node.name,
        to_path(path),
        target
    );
    tree.relocate(folder, position, target)
        .ok_or(BrowserError::UnknownNode(folder))?;
    Ok(())
}

/// Map every project id in the tree to its node
///
/// Children with a uri are recorded under the id derived from it; children
/// without one are descended into. Uris that yield no id are skipped.
pub fn index_all(tree: &ProjectTree) -> HashMap<String, NodeId> {
    let mut items = HashMap::new();
    index_into(tree, tree.root(), &mut items);
    items
}

fn index_into(tree: &ProjectTree, folder: NodeId, items: &mut HashMap<String, NodeId>) {
    for &child in tree.children_of(folder) {
        let Some(node) = tree.get(child) else {
            continue;
        };
        match node.uri.as_deref() {
            Some(uri) => {
                if let Some(id) = uri_to_id(uri) {
                    items.insert(id.to_string(), child);
                }
            }
            None => index_into(tree, child, items),
        }
    }
}

/// Pick a child name for `folder` that is not taken yet
///
/// Returns `proposed` if free, otherwise the first free of `proposed.1`,
/// `proposed.2`, …
///
/// # Examples
/// ```
/// use project_browser::logic::path::{insert_at, unique_name};
/// use project_browser::model::{Node, ProjectTree};
///
/// let mut tree = ProjectTree::new("root");
/// insert_at::<&str>(&mut tree, &[], Node::item("Report", "1")).unwrap();
/// assert_eq!(unique_name(&tree, tree.root(), "Report").unwrap(), "Report.1");
/// assert_eq!(unique_name(&tree, tree.root(), "Plan").unwrap(), "Plan");
/// ```
pub fn unique_name(tree: &ProjectTree, folder: NodeId, proposed: &str) -> BrowserResult<String> {
    let children = folder_children(tree, folder)?;
    let taken = |name: &str| {
        children
            .iter()
            .any(|child| tree.get(*child).is_some_and(|n| n.name == name))
    };

    let mut name = proposed.to_string();
    let mut index = 1;
    while taken(&name) {
        name = format!("{}.{}", proposed, index);
        index += 1;
    }

    Ok(name)
}

fn folder_children(tree: &ProjectTree, id: NodeId) -> BrowserResult<&[NodeId]> {
    let node = tree.node(id)?;
    node.children().ok_or_else(|| BrowserError::NotAFolder {
        name: node.name.clone(),
    })
}
