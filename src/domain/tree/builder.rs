//! Tree construction from catalog queries.

use tracing::{debug, warn};

use super::node::TreeNode;
use super::ElementTree;
use crate::domain::ports::ElementCatalog;
use crate::domain::value_objects::ElementKind;

/// Move `current` to the front of `mapsets`, keeping the others in order.
///
/// Nothing changes when `current` is absent, already first, or not listed.
pub fn move_to_front(mapsets: &mut [String], current: Option<&str>) {
    let Some(current) = current else {
        return;
    };
    if let Some(pos) = mapsets.iter().position(|m| m == current) {
        mapsets[..=pos].rotate_right(1);
    }
}

/// Build the element tree for `element_type`.
///
/// Unknown element types yield the "not selectable" placeholder tree. For a
/// known type, one branch is created per mapset (with `current_mapset`
/// moved to the front) holding that mapset's elements sorted by name. A
/// mapset whose query fails keeps an empty, collapsed branch; the remaining
/// mapsets are still listed.
pub fn build_tree<C>(
    element_type: &str,
    mapsets: &[String],
    current_mapset: Option<&str>,
    catalog: &C,
) -> ElementTree
where
    C: ElementCatalog + ?Sized,
{
    let Some(kind) = ElementKind::from_alias(element_type) else {
        debug!(element_type, "element type is not selectable");
        return ElementTree::not_selectable();
    };

    let mut ordered = mapsets.to_vec();
    move_to_front(&mut ordered, current_mapset);

    let mut tree = ElementTree::default();
    for mapset in &ordered {
        let mut branch = TreeNode::mapset(mapset.as_str());

        match catalog.list_elements(kind, mapset) {
            Ok(mut names) => {
                names.sort();
                for name in names.into_iter().filter(|n| !n.is_empty()) {
                    branch.add_child(TreeNode::element(name, mapset.as_str()));
                }
            }
            Err(e) => {
                warn!(mapset = %mapset, kind = %kind, error = %e, "skipping mapset");
            }
        }

        branch.expanded = branch.has_children();
        tree.push(branch);
    }

    debug!(
        kind = %kind,
        mapsets = ordered.len(),
        elements = tree.leaves().count(),
        "built element tree"
    );
    tree
}
