//! Text rendering of the selector tree for terminal output.

use crate::domain::selection::Selection;
use crate::domain::tree::{ElementTree, NodeKind, NodePath};
use crate::ui::theme::{icons, icons_ascii};

/// Render the visible part of `tree`, one node per line.
///
/// Children of collapsed branches are hidden. Selected leaves are marked,
/// and the hovered node gets a `>` cursor.
pub fn render_tree(
    tree: &ElementTree,
    selection: &Selection,
    hovered: Option<&NodePath>,
    supports_unicode: bool,
) -> String {
    let (expand, collapse, selected, unselected) = if supports_unicode {
        (icons::EXPAND, icons::COLLAPSE, icons::SELECTED, icons::UNSELECTED)
    } else {
        (
            icons_ascii::EXPAND,
            icons_ascii::COLLAPSE,
            icons_ascii::SELECTED,
            icons_ascii::UNSELECTED,
        )
    };
    let blank = " ".repeat(expand.chars().count());

    let mut lines = Vec::new();
    for (path, node) in tree.walk() {
        if let Some(parent) = path.parent() {
            if !tree.get(&parent).is_some_and(|p| p.expanded) {
                continue;
            }
        }

        let cursor = if hovered == Some(&path) { "> " } else { "  " };
        let line = match node.kind {
            NodeKind::Mapset => {
                let icon = match (node.has_children(), node.expanded) {
                    (false, _) => blank.as_str(),
                    (true, true) => expand,
                    (true, false) => collapse,
                };
                format!("{}{} {}", cursor, icon, node.label)
            }
            NodeKind::Element => {
                let mark = if selection.items().contains(&path) {
                    selected
                } else {
                    unselected
                };
                format!("{}{} {} {}", cursor, blank, mark, node.label)
            }
            NodeKind::Placeholder => format!("{}{}", cursor, node.label),
        };
        lines.push(line);
    }

    lines.join("\n")
}

/// One-line summary of the selection state
pub fn render_status(selection: &Selection, tree: &ElementTree) -> String {
    let total = tree.leaves().count();
    let mode = if selection.is_multiple() {
        "multiple"
    } else {
        "single"
    };
    format!("Selected: {}/{} elements ({})", selection.len(), total, mode)
}
