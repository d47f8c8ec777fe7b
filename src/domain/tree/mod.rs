//! Element tree
//!
//! A two-level tree under a hidden root: mapset branches at the top, element
//! leaves beneath them. Nodes are addressed by [`NodePath`], an index path
//! from the hidden root, so a node's parent is derived from its path rather
//! than stored as a back-reference.
//!
//! - `node` - TreeNode data structure
//! - `builder` - tree construction from catalog queries

mod builder;
mod node;

pub use builder::{build_tree, move_to_front};
pub use node::{NodeKind, TreeNode, NOT_SELECTABLE_LABEL};

use std::fmt;

use serde::Serialize;

/// Index path to a node: `[branch]` or `[branch, leaf]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Depth below the hidden root (top-level nodes are depth 0)
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Path of the parent node, `None` for top-level nodes
    pub fn parent(&self) -> Option<NodePath> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(NodePath(self.0[..self.0.len() - 1].to_vec()))
    }

    fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// The tree shown by the selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ElementTree {
    nodes: Vec<TreeNode>,
}

impl ElementTree {
    /// Tree holding only the "not selectable" placeholder
    pub fn not_selectable() -> Self {
        Self {
            nodes: vec![TreeNode::placeholder()],
        }
    }

    /// Append a top-level node
    pub fn push(&mut self, node: TreeNode) -> NodePath {
        self.nodes.push(node);
        NodePath(vec![self.nodes.len() - 1])
    }

    /// Top-level nodes (children of the hidden root)
    pub fn top_level(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_not_selectable(&self) -> bool {
        matches!(self.nodes.as_slice(), [only] if only.kind == NodeKind::Placeholder)
    }

    pub fn get(&self, path: &NodePath) -> Option<&TreeNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut TreeNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get_mut(*first)?;
        for index in rest {
            node = node.child_mut(*index)?;
        }
        Some(node)
    }

    /// Display text of the node at `path`
    pub fn label(&self, path: &NodePath) -> Option<&str> {
        self.get(path).map(|node| node.label.as_str())
    }

    /// All nodes in depth-first pre-order, with their paths
    pub fn walk(&self) -> Vec<(NodePath, &TreeNode)> {
        let mut out = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            Self::walk_node(node, NodePath(vec![i]), &mut out);
        }
        out
    }

    fn walk_node<'a>(node: &'a TreeNode, path: NodePath, out: &mut Vec<(NodePath, &'a TreeNode)>) {
        let children = node.children();
        out.push((path.clone(), node));
        for (i, child) in children.iter().enumerate() {
            Self::walk_node(child, path.child(i), out);
        }
    }

    /// Element leaves in display order
    pub fn leaves(&self) -> impl Iterator<Item = (NodePath, &TreeNode)> {
        self.walk().into_iter().filter(|(_, node)| node.is_selectable())
    }

    /// First node, in depth-first pre-order, whose display text equals `text`.
    ///
    /// Matching is exact and case-sensitive. Branches are searched too, so a
    /// `Mapset: ...` label can be found; callers decide whether the match is
    /// selectable.
    pub fn find(&self, text: &str) -> Option<NodePath> {
        self.nodes
            .iter()
            .enumerate()
            .find_map(|(i, node)| Self::find_in(node, NodePath(vec![i]), text))
    }

    fn find_in(node: &TreeNode, path: NodePath, text: &str) -> Option<NodePath> {
        if node.label == text {
            return Some(path);
        }
        node.children()
            .iter()
            .enumerate()
            .find_map(|(i, child)| Self::find_in(child, path.child(i), text))
    }
}
