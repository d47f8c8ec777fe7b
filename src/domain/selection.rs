//! Selection state over the element tree.
//!
//! The selection is an ordered list of leaf paths. With `multiple == false`
//! it holds at most one entry; with `multiple == true` every selected leaf is
//! appended, duplicates included.

use super::tree::{ElementTree, NodePath};

/// Coarse state of a [`Selection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    Single,
    Multiple,
}

/// Currently selected leaves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: Vec<NodePath>,
    multiple: bool,
}

impl Selection {
    pub fn new(multiple: bool) -> Self {
        Self {
            items: Vec::new(),
            multiple,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Switch the selection-count policy.
    ///
    /// Leaving multiple mode keeps only the first selected leaf.
    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
        if !multiple {
            self.items.truncate(1);
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.items.len(), self.multiple) {
            (0, _) => SelectionPhase::Empty,
            (1, false) => SelectionPhase::Single,
            _ => SelectionPhase::Multiple,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[NodePath] {
        &self.items
    }

    pub fn first(&self) -> Option<&NodePath> {
        self.items.first()
    }

    /// Select the node at `path`.
    ///
    /// Branches, the placeholder and unknown paths are ignored. Returns
    /// whether the selection changed.
    pub fn select(&mut self, tree: &ElementTree, path: &NodePath) -> bool {
        match tree.get(path) {
            Some(node) if node.is_selectable() => {}
            _ => return false,
        }
        if !self.multiple {
            self.items.clear();
        }
        self.items.push(path.clone());
        true
    }

    /// Select the first node whose display text equals `text`.
    ///
    /// Prior entries are kept (subject to the single-selection bound).
    /// Returns the selected path, or `None` when nothing selectable matched.
    pub fn select_text(&mut self, tree: &ElementTree, text: &str) -> Option<NodePath> {
        let path = tree.find(text)?;
        self.select(tree, &path).then_some(path)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Display texts of the selected leaves joined with `,`
    pub fn to_display_string(&self, tree: &ElementTree) -> String {
        self.labels(tree).join(",")
    }

    /// Display texts of the selected leaves, in selection order
    pub fn labels<'a>(&self, tree: &'a ElementTree) -> Vec<&'a str> {
        self.items.iter().filter_map(|p| tree.label(p)).collect()
    }
}
