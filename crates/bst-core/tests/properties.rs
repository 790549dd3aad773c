//! Property tests over arbitrary insertion sequences.

use std::collections::BTreeSet;
use std::time::Duration;

use bst_core::tree::FnVisitor;
use bst_core::{BinarySearchTree, Layout, SearchAlgorithm, Session, TreeNode};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-200i32..200, 0..60)
}

proptest! {
    #[test]
    fn in_order_is_strictly_ascending(input in values()) {
        let tree = BinarySearchTree::from_values(input.iter().copied());
        let sorted = tree.in_order();
        prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

        let distinct: Vec<i32> = input.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(sorted, distinct);
    }

    #[test]
    fn duplicate_insert_is_idempotent(input in values(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!input.is_empty());
        let mut tree = BinarySearchTree::from_values(input.iter().copied());
        let before = tree.in_order();
        let dup = input[pick.index(input.len())];

        prop_assert!(!tree.insert(dup));
        prop_assert_eq!(tree.in_order(), before);
    }

    #[test]
    fn search_agrees_with_in_order(input in values(), probe in -250i32..250) {
        let tree = BinarySearchTree::from_values(input.iter().copied());
        prop_assert_eq!(tree.search(probe), tree.in_order().contains(&probe));
    }

    #[test]
    fn strategies_report_consistent_results(input in values(), target in -250i32..250) {
        let tree = BinarySearchTree::from_values(input.iter().copied());
        let present = tree.search(target);

        for algorithm in SearchAlgorithm::ALL {
            let result = algorithm.run(&tree, target);
            prop_assert_eq!(result.found, present, "{}", algorithm);
            if result.found {
                prop_assert_eq!(result.path.last().copied(), Some(target));
            }

            let unique: BTreeSet<i32> = result.path.iter().copied().collect();
            prop_assert_eq!(unique.len(), result.path.len());
            prop_assert!(result.steps >= result.path.len());
        }

        // Guided strategies walk the canonical descent
        prop_assert_eq!(SearchAlgorithm::Recursive.run(&tree, target).path, tree.search_path(target));
        prop_assert_eq!(SearchAlgorithm::Iterative.run(&tree, target).path, tree.search_path(target));

        if !present {
            for algorithm in [SearchAlgorithm::BreadthFirst, SearchAlgorithm::DepthFirst] {
                let result = algorithm.run(&tree, target);
                prop_assert_eq!(result.path.len(), tree.len());
                prop_assert_eq!(result.steps, tree.len());
            }
            let recursive = SearchAlgorithm::Recursive.run(&tree, target);
            prop_assert_eq!(recursive.steps, recursive.path.len() + 1);
        }
    }

    #[test]
    fn depth_first_matches_pre_order_prefix(input in values(), target in -250i32..250) {
        let tree = BinarySearchTree::from_values(input.iter().copied());
        let result = SearchAlgorithm::DepthFirst.run(&tree, target);
        let pre_order = tree.pre_order();
        prop_assert_eq!(&pre_order[..result.path.len()], result.path.as_slice());
    }

    #[test]
    fn layout_sibling_intervals_are_disjoint(input in values()) {
        let tree = BinarySearchTree::from_values(input.iter().copied());
        let layout = Layout::with_defaults(&tree);
        prop_assert_eq!(layout.len(), tree.len());

        let mut families = Vec::new();
        tree.traverse_pre_order(&mut FnVisitor::new(|node: &TreeNode, _| {
            families.push((node.value(), node.left().map(TreeNode::value), node.right().map(TreeNode::value)));
        }));

        for (parent, left, right) in families {
            let parent_interval = layout.interval(parent).unwrap();
            let parent_pos = layout.position(parent).unwrap();
            for child in [left, right].into_iter().flatten() {
                let child_interval = layout.interval(child).unwrap();
                prop_assert!(parent_interval.contains(&child_interval));
                prop_assert!(layout.position(child).unwrap().y < parent_pos.y);
            }
            if let (Some(l), Some(r)) = (left, right) {
                let li = layout.interval(l).unwrap();
                let ri = layout.interval(r).unwrap();
                prop_assert!(!li.overlaps(&ri));
                prop_assert!(layout.position(l).unwrap().x < layout.position(r).unwrap().x);
            }
        }
    }

    #[test]
    fn revealed_path_is_always_a_prefix(
        input in proptest::collection::vec(1i32..100, 1..30),
        target in 1i32..100,
        algorithm_idx in 0usize..4,
        ticks in proptest::collection::vec(0u64..2000, 1..40),
    ) {
        let algorithm = SearchAlgorithm::ALL[algorithm_idx];
        let expected = algorithm.run(&BinarySearchTree::from_values(input.iter().copied()), target);

        let mut session = Session::default();
        session.build_tree_from_values(input);
        prop_assert!(session.search(target, algorithm));

        let mut finished = false;
        for ms in ticks {
            session.tick(Duration::from_millis(ms));
            let path = session.search_path();
            prop_assert!(expected.path.starts_with(path));
            if !session.is_searching() {
                finished = true;
                prop_assert_eq!(session.last_result(), Some(&expected));
            }
            prop_assert!(!(finished && session.is_searching()), "search resumed without a new request");
        }
    }
}
