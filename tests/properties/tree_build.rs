//! Property tests for tree construction.

use proptest::prelude::*;

use gselect::domain::tree::{move_to_front, NOT_SELECTABLE_LABEL};
use gselect::{build_tree, ElementKind, StaticCatalog};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_.]{1,12}").unwrap()
}

/// Distinct mapset names, in random order
fn mapsets() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(name(), 0..6)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: moving the current mapset to the front keeps the rest in order.
    #[test]
    fn property_move_to_front_is_stable(
        list in mapsets(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assume!(!list.is_empty());
        let i = pick.index(list.len());
        let current = list[i].clone();

        let mut moved = list.clone();
        move_to_front(&mut moved, Some(&current));

        let mut expected = vec![current.clone()];
        expected.extend(list.iter().filter(|m| **m != current).cloned());
        prop_assert_eq!(moved, expected);
    }

    /// PROPERTY: a current mapset that is not listed changes nothing.
    #[test]
    fn property_move_to_front_ignores_unlisted(list in mapsets()) {
        let mut moved = list.clone();
        move_to_front(&mut moved, Some("#not-a-mapset#"));
        prop_assert_eq!(moved, list);
    }

    /// PROPERTY: leaves under each branch are sorted, qualified, and non-empty.
    #[test]
    fn property_leaves_sorted_and_qualified(
        list in mapsets(),
        names in proptest::collection::vec(
            prop_oneof![name(), Just(String::new())],
            0..8
        )
    ) {
        let mut catalog = StaticCatalog::new().with_mapsets(list.clone());
        for mapset in &list {
            catalog = catalog.with_elements(mapset, ElementKind::Vector, names.clone());
        }

        let tree = build_tree("vector", &list, None, &catalog);
        prop_assert_eq!(tree.top_level().len(), list.len());

        let expected_count = names.iter().filter(|n| !n.is_empty()).count();
        for branch in tree.top_level() {
            prop_assert!(branch.is_branch());
            prop_assert_eq!(branch.children().len(), expected_count);
            prop_assert_eq!(branch.expanded, expected_count > 0);

            let leaf_names: Vec<&str> = branch.children().iter().map(|n| n.name.as_str()).collect();
            let mut sorted = leaf_names.clone();
            sorted.sort();
            prop_assert_eq!(&leaf_names, &sorted);

            for leaf in branch.children() {
                prop_assert!(leaf.is_selectable());
                prop_assert!(!leaf.has_children());
                prop_assert_eq!(&leaf.label, &format!("{}@{}", leaf.name, branch.name));
            }
        }
    }

    /// PROPERTY: names outside the alias table always give the lone placeholder.
    #[test]
    fn property_unknown_types_give_placeholder(
        element_type in ".{0,24}",
        list in mapsets()
    ) {
        prop_assume!(ElementKind::from_alias(&element_type).is_none());
        let catalog = StaticCatalog::new().with_mapsets(list.clone());

        let tree = build_tree(&element_type, &list, None, &catalog);
        prop_assert_eq!(tree.top_level().len(), 1);
        prop_assert_eq!(tree.top_level()[0].label.as_str(), NOT_SELECTABLE_LABEL);
        prop_assert!(!tree.top_level()[0].has_children());
    }

    /// PROPERTY: a failing mapset never removes the other mapsets' elements.
    #[test]
    fn property_failed_mapset_is_isolated(
        list in mapsets(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assume!(!list.is_empty());
        let broken = list[pick.index(list.len())].clone();

        let mut catalog = StaticCatalog::new().with_mapsets(list.clone()).with_failing(broken.clone());
        for mapset in &list {
            catalog = catalog.with_elements(mapset, ElementKind::Raster, ["dem"]);
        }

        let tree = build_tree("raster", &list, None, &catalog);
        prop_assert_eq!(tree.top_level().len(), list.len());
        for branch in tree.top_level() {
            if branch.name == broken {
                prop_assert!(!branch.has_children());
                prop_assert!(!branch.expanded);
            } else {
                prop_assert_eq!(branch.children().len(), 1);
            }
        }
    }
}
