//! Tree node data structure.

use serde::Serialize;

/// Label of the single node shown when an element type cannot be listed
pub const NOT_SELECTABLE_LABEL: &str = "Not selectable element";

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A mapset branch; holds element leaves
    Mapset,
    /// A selectable element leaf
    Element,
    /// Informational leaf shown for unlistable element types
    Placeholder,
}

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub kind: NodeKind,
    /// Display text (`Mapset: PERMANENT`, `elevation@PERMANENT`)
    pub label: String,
    /// Bare element or mapset name
    pub name: String,
    /// Owning mapset (leaves only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapset: Option<String>,
    /// Whether the view should show this branch opened
    pub expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a mapset branch
    pub fn mapset(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: NodeKind::Mapset,
            label: format!("Mapset: {}", name),
            name,
            mapset: None,
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Create an element leaf, qualified with its mapset
    pub fn element(name: impl Into<String>, mapset: impl Into<String>) -> Self {
        let name = name.into();
        let mapset = mapset.into();
        Self {
            kind: NodeKind::Element,
            label: format!("{}@{}", name, mapset),
            name,
            mapset: Some(mapset),
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Create the "not selectable" placeholder leaf
    pub fn placeholder() -> Self {
        Self {
            kind: NodeKind::Placeholder,
            label: NOT_SELECTABLE_LABEL.to_string(),
            name: String::new(),
            mapset: None,
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn is_branch(&self) -> bool {
        self.kind == NodeKind::Mapset
    }

    /// Only element leaves may enter a selection
    pub fn is_selectable(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Append an element leaf to a mapset branch.
    ///
    /// Returns `false` (and drops `child`) when `self` is not a branch or
    /// `child` is not an element.
    pub fn add_child(&mut self, child: TreeNode) -> bool {
        if !self.is_branch() || child.kind != NodeKind::Element {
            return false;
        }
        self.children.push(child);
        true
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut TreeNode> {
        self.children.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapset_label_is_prefixed() {
        let node = TreeNode::mapset("PERMANENT");
        assert_eq!(node.label, "Mapset: PERMANENT");
        assert_eq!(node.name, "PERMANENT");
        assert!(node.is_branch());
        assert!(!node.is_selectable());
    }

    #[test]
    fn element_label_is_qualified() {
        let node = TreeNode::element("elevation", "PERMANENT");
        assert_eq!(node.label, "elevation@PERMANENT");
        assert_eq!(node.mapset.as_deref(), Some("PERMANENT"));
        assert!(node.is_selectable());
    }

    #[test]
    fn placeholder_is_not_selectable() {
        let node = TreeNode::placeholder();
        assert_eq!(node.label, NOT_SELECTABLE_LABEL);
        assert!(!node.is_selectable());
        assert!(!node.is_branch());
    }

    #[test]
    fn only_branches_take_children() {
        let mut leaf = TreeNode::element("a", "m");
        assert!(!leaf.add_child(TreeNode::element("b", "m")));
        assert!(!leaf.has_children());

        let mut branch = TreeNode::mapset("m");
        assert!(branch.add_child(TreeNode::element("a", "m")));
        assert!(!branch.add_child(TreeNode::mapset("nested")));
        assert!(!branch.add_child(TreeNode::placeholder()));
        assert_eq!(branch.children().len(), 1);
    }
}
