use std::collections::BTreeSet;

use avl_nn::{AvlTree, OrderedTree};
use quickcheck::quickcheck;

use crate::check_structure;

quickcheck! {
    fn balanced_after_inserts_and_removes(xs: Vec<i16>, removes: Vec<i16>) -> bool {
        let mut tree = AvlTree::new();
        let mut set = BTreeSet::new();
        for x in &xs {
            if tree.insert(*x) != set.insert(*x) {
                return false;
            }
            if check_structure(&tree) > 1 {
                return false;
            }
        }
        for x in &removes {
            if tree.remove(x) != set.take(x) {
                return false;
            }
            if check_structure(&tree) > 1 {
                return false;
            }
        }
        tree.in_order().map(|n| n.value()).eq(set.iter())
    }

    fn height_within_avl_bound(n: u16) -> bool {
        let n = usize::from(n % 2048);
        let mut tree = AvlTree::new();
        for x in 0..n {
            tree.insert(x);
        }
        let bound = 1.45 * ((n + 2) as f64).log2() - 1.0;
        tree.len() == n && tree.height() as f64 <= bound
    }

    fn search_hits_or_neighbors(xs: Vec<i8>, target: i8) -> bool {
        let mut tree = AvlTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        match tree.search(&target) {
            None => xs.is_empty(),
            Some(found) if *found.value() == target => xs.contains(&target),
            // On a miss the target would hang off an empty child of the returned node.
            Some(near) => {
                !xs.contains(&target)
                    && if target < *near.value() {
                        near.left().is_none()
                    } else {
                        near.right().is_none()
                    }
            }
        }
    }

    fn min_and_max(xs: Vec<i8>) -> bool {
        let mut tree = AvlTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        tree.min().map(|n| *n.value()) == xs.iter().copied().min()
            && tree.max().map(|n| *n.value()) == xs.iter().copied().max()
    }
}

#[test]
fn remove_in_every_rotation_order_empties_tree() {
    let values = [5, 3, 8, 1, 4, 7, 9];
    let mut order = values;
    // Every rotation of the removal order.
    for _ in 0..values.len() {
        order.rotate_left(1);
        let mut tree = AvlTree::new();
        for x in values {
            tree.insert(x);
        }
        for x in &order {
            assert_eq!(tree.remove(x), Some(*x));
            assert!(check_structure(&tree) <= 1);
        }
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
    }
}

#[test]
fn into_iterator_is_in_order() {
    let mut tree = AvlTree::new();
    for x in [3, 1, 2] {
        tree.insert(x);
    }
    let mut seen = Vec::new();
    for node in &tree {
        seen.push(*node.value());
    }
    assert_eq!(seen, [1, 2, 3]);
}
