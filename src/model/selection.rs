//! Selection Model
//!
//! Single- and multi-select state over tree handles. Identity is the
//! [`NodeId`], never the node's contents.

use super::types::NodeId;
use crate::logic::navigation::range_walk;

/// At most one selected item
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<NodeId>,
}

impl SingleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn select_none(&mut self) {
        self.selected = None;
    }

    pub fn select_item(&mut self, item: NodeId) {
        self.selected = Some(item);
    }

    pub fn is_selected(&self, item: NodeId) -> bool {
        self.selected == Some(item)
    }
}

/// Ordered, duplicate-free multi-selection
///
/// The last selected item is the anchor for range selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultiSelection {
    selected: Vec<NodeId>,
}

impl MultiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected items in selection order
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Most recently selected item
    pub fn anchor(&self) -> Option<NodeId> {
        self.selected.last().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn select_only(&mut self, item: NodeId) {
        self.selected.clear();
        self.selected.push(item);
    }

    /// Append `item` unless it is already selected
    pub fn add(&mut self, item: NodeId) {
        if !self.is_selected(item) {
            self.selected.push(item);
        }
    }

    pub fn remove(&mut self, item: NodeId) {
        if let Some(idx) = self.selected.iter().position(|s| *s == item) {
            self.selected.remove(idx);
        }
    }

    pub fn is_selected(&self, item: NodeId) -> bool {
        self.selected.contains(&item)
    }

    /// Extend the selection from the anchor to `target_index` of `display_list`
    ///
    /// Items between the anchor and the target (both included) are added in
    /// walk order. Nothing is ever removed. With no selection, or when the
    /// anchor is no longer displayed (e.g. after re-filtering), this falls
    /// back to selecting only the target. Out-of-range targets are ignored.
    pub fn select_range(&mut self, display_list: &[NodeId], target_index: usize) {
        let Some(&target) = display_list.get(target_index) else {
            return;
        };

        let anchor_index = self
            .anchor()
            .and_then(|anchor| display_list.iter().position(|item| *item == anchor));

        match anchor_index {
            Some(anchor_index) => {
                for idx in range_walk(anchor_index, target_index) {
                    self.add(display_list[idx]);
                }
            }
            None => self.select_only(target),
        }
    }

    /// Whether a click on `item` hits an existing multi-item selection
    ///
    /// `snapshot` is the selection captured when the click started; drag
    /// handlers restore it only if the clicked item was part of it.
    pub fn is_click_on_selected(snapshot: &[NodeId], item: NodeId) -> bool {
        snapshot.len() > 1 && snapshot.contains(&item)
    }
}
