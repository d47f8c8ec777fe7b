//! View callbacks for tree interaction.

use crate::domain::tree::{NodePath, TreeNode};

/// Hooks the host view may implement to observe tree interaction.
///
/// Every method defaults to a no-op; hosts override only what they need.
pub trait TreeEvents {
    /// A branch was opened
    fn on_expand(&mut self, _path: &NodePath, _node: &TreeNode) {}

    /// A branch was closed
    fn on_collapse(&mut self, _path: &NodePath, _node: &TreeNode) {}

    /// A node was activated (double click, Enter)
    fn on_activate(&mut self, _path: &NodePath, _node: &TreeNode) {}
}

/// Ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl TreeEvents for NoopEvents {}
