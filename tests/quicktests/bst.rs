use std::collections::BTreeSet;

use avl_nn::{BinarySearchTree, OrderedTree};
use quickcheck::quickcheck;

use crate::check_structure;

quickcheck! {
    fn ordered_after_inserts_and_removes(xs: Vec<i16>, removes: Vec<i16>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut set = BTreeSet::new();
        for x in &xs {
            if tree.insert(*x) != set.insert(*x) {
                return false;
            }
        }
        check_structure(&tree);
        for x in &removes {
            if tree.remove(x) != set.take(x) {
                return false;
            }
            check_structure(&tree);
        }
        tree.in_order().map(|n| n.value()).eq(set.iter())
    }

    fn ascending_input_is_a_list(n: u16) -> bool {
        let n = usize::from(n % 512);
        let mut tree = BinarySearchTree::new();
        for x in 0..n {
            tree.insert(x);
        }
        tree.height() == n as isize - 1
    }
}
