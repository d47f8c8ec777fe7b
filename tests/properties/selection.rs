//! Property tests for the selection state machine.

use proptest::prelude::*;

use gselect::{ElementKind, ElementSelector, NodePath, SelectionPhase, SelectorOptions, StaticCatalog};

fn selector(multiple: bool) -> ElementSelector<StaticCatalog> {
    let catalog = StaticCatalog::new()
        .with_mapsets(["A", "B"])
        .with_elements("A", ElementKind::Raster, ["a1", "a2", "a3"])
        .with_elements("B", ElementKind::Raster, ["b1"]);
    ElementSelector::new(
        catalog,
        "raster",
        SelectorOptions {
            multiple,
            search_path: None,
        },
    )
}

/// Paths into the fixture tree, including branches and dangling paths
fn path() -> impl Strategy<Value = NodePath> {
    prop_oneof![
        (0usize..3).prop_map(|b| NodePath::new([b])),
        (0usize..3, 0usize..4).prop_map(|(b, l)| NodePath::new([b, l])),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: branches never enter the selection.
    #[test]
    fn property_branches_never_selected(
        multiple in any::<bool>(),
        clicks in proptest::collection::vec(path(), 0..16)
    ) {
        let mut selector = selector(multiple);
        for click in &clicks {
            selector.select_leaf(click);
        }

        let tree = selector.tree();
        for selected in selector.selection().items() {
            let node = tree.get(selected).expect("selected path resolves");
            prop_assert!(node.is_selectable());
            prop_assert!(!node.is_branch());
        }
    }

    /// PROPERTY: single mode keeps at most the last selectable click.
    #[test]
    fn property_single_mode_keeps_last(clicks in proptest::collection::vec(path(), 0..16)) {
        let mut selector = selector(false);
        let mut last = None;
        for click in &clicks {
            if selector.select_leaf(click) {
                last = Some(click.clone());
            }
        }

        prop_assert!(selector.selection().len() <= 1);
        prop_assert_eq!(selector.selection().first().cloned(), last.clone());
        let expected_phase = if last.is_some() { SelectionPhase::Single } else { SelectionPhase::Empty };
        prop_assert_eq!(selector.phase(), expected_phase);
    }

    /// PROPERTY: multiple mode appends every selectable click, in order.
    #[test]
    fn property_multiple_mode_appends(clicks in proptest::collection::vec(path(), 0..16)) {
        let mut selector = selector(true);
        let mut accepted = Vec::new();
        for click in &clicks {
            if selector.select_leaf(click) {
                accepted.push(click.clone());
            }
        }

        prop_assert_eq!(selector.selection().items(), accepted.as_slice());

        let labels: Vec<String> = accepted
            .iter()
            .map(|p| selector.tree().label(p).unwrap().to_string())
            .collect();
        prop_assert_eq!(selector.selection_text(), labels.join(","));
    }

    /// PROPERTY: selecting by text is the same as selecting the found path.
    #[test]
    fn property_set_from_text_matches_find(name in "(a1|a2|a3|b1|zz)@(A|B)") {
        let mut by_text = selector(true);
        let mut by_path = selector(true);

        let found = by_text.set_from_text(&name);
        if let Some(path) = by_text.tree().find(&name) {
            by_path.select_leaf(&path);
            prop_assert_eq!(found, Some(path));
        } else {
            prop_assert!(found.is_none());
        }
        prop_assert_eq!(by_text.selection_text(), by_path.selection_text());
    }
}
