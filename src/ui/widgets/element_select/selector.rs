//! ElementSelector: tree and selection owned by one selector widget.

use std::fmt;

use tracing::{debug, warn};

use super::events::{NoopEvents, TreeEvents};
use crate::domain::ports::ElementCatalog;
use crate::domain::selection::{Selection, SelectionPhase};
use crate::domain::tree::{build_tree, ElementTree, NodePath};
use crate::domain::value_objects::ElementKind;

/// Settings a selector is created with
#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    /// Allow more than one selected element
    pub multiple: bool,
    /// Mapsets to list when none are passed explicitly.
    /// `None` asks the catalog for its search path.
    pub search_path: Option<Vec<String>>,
}

/// Request to the view when the popup opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupFocus {
    /// Node to scroll into view and highlight
    pub path: NodePath,
    pub label: String,
}

/// Selector for GIS elements grouped by mapset
pub struct ElementSelector<C> {
    catalog: C,
    search_path: Option<Vec<String>>,
    element_type: String,
    tree: ElementTree,
    selection: Selection,
    hovered: Option<NodePath>,
    events: Box<dyn TreeEvents>,
}

impl<C> fmt::Debug for ElementSelector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementSelector")
            .field("element_type", &self.element_type)
            .field("search_path", &self.search_path)
            .field("tree", &self.tree)
            .field("selection", &self.selection)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl<C: ElementCatalog> ElementSelector<C> {
    /// Create a selector and build its tree for `element_type`
    pub fn new(catalog: C, element_type: &str, options: SelectorOptions) -> Self {
        let mut selector = Self {
            catalog,
            search_path: options.search_path,
            element_type: String::new(),
            tree: ElementTree::default(),
            selection: Selection::new(options.multiple),
            hovered: None,
            events: Box::new(NoopEvents),
        };
        selector.set_element_type(element_type, None);
        selector
    }

    /// Install view callbacks
    pub fn with_events(mut self, events: impl TreeEvents + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    /// Rebuild the tree for `element_type` and clear the selection.
    ///
    /// `mapsets` overrides the search path for this build only.
    pub fn set_element_type(&mut self, element_type: &str, mapsets: Option<Vec<String>>) {
        self.element_type = element_type.to_string();
        self.selection.clear();
        self.hovered = None;

        if ElementKind::from_alias(element_type).is_none() {
            self.tree = ElementTree::not_selectable();
            return;
        }

        let mapsets = mapsets
            .or_else(|| self.search_path.clone())
            .unwrap_or_else(|| self.catalog_mapsets());
        let current = match self.catalog.current_mapset() {
            Ok(current) => current,
            Err(e) => {
                warn!(error = %e, "current mapset unknown");
                None
            }
        };

        debug!(element_type, ?mapsets, ?current, "rebuilding selector tree");
        self.tree = build_tree(element_type, &mapsets, current.as_deref(), &self.catalog);
    }

    /// Rebuild the tree for the current element type
    pub fn reload(&mut self) {
        let element_type = std::mem::take(&mut self.element_type);
        self.set_element_type(&element_type, None);
    }

    fn catalog_mapsets(&self) -> Vec<String> {
        self.catalog.list_mapsets().unwrap_or_else(|e| {
            warn!(error = %e, "cannot list mapsets");
            Vec::new()
        })
    }

    pub fn element_type(&self) -> &str {
        &self.element_type
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn is_multiple(&self) -> bool {
        self.selection.is_multiple()
    }

    /// Toggle the selection-count policy
    pub fn set_multiple(&mut self, multiple: bool) {
        self.selection.set_multiple(multiple);
    }

    /// Select the leaf at `path`; branches are ignored
    pub fn select_leaf(&mut self, path: &NodePath) -> bool {
        self.selection.select(&self.tree, path)
    }

    /// Select the element whose display text is `text`
    pub fn set_from_text(&mut self, text: &str) -> Option<NodePath> {
        let found = self.selection.select_text(&self.tree, text);
        if found.is_none() {
            debug!(text, "no selectable element matches");
        }
        found
    }

    /// Comma-joined display text of the selection
    pub fn selection_text(&self) -> String {
        self.selection.to_display_string(&self.tree)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Where the view should focus when the popup opens
    pub fn on_popup_open(&self) -> Option<PopupFocus> {
        let path = self.selection.first()?;
        let label = self.tree.label(path)?;
        Some(PopupFocus {
            path: path.clone(),
            label: label.to_string(),
        })
    }

    /// Record the node under the pointer without selecting it
    pub fn hover(&mut self, path: &NodePath) -> bool {
        if self.tree.get(path).is_none() {
            return false;
        }
        self.hovered = Some(path.clone());
        true
    }

    pub fn hovered(&self) -> Option<&NodePath> {
        self.hovered.as_ref()
    }

    /// Open the branch at `path`
    pub fn expand(&mut self, path: &NodePath) -> bool {
        match self.tree.get_mut(path) {
            Some(node) if node.is_branch() && node.has_children() => {
                node.expanded = true;
                self.events.on_expand(path, node);
                true
            }
            _ => false,
        }
    }

    /// Close the branch at `path`
    pub fn collapse(&mut self, path: &NodePath) -> bool {
        match self.tree.get_mut(path) {
            Some(node) if node.is_branch() => {
                node.expanded = false;
                self.events.on_collapse(path, node);
                true
            }
            _ => false,
        }
    }

    /// Activate the node at `path`
    pub fn activate(&mut self, path: &NodePath) -> bool {
        match self.tree.get(path) {
            Some(node) => {
                self.events.on_activate(path, node);
                true
            }
            None => false,
        }
    }
}
