use avl_nn::{NodeRef, OrderedTree};

mod avl;
mod bst;

/// Walks the tree through its public handles and checks ordering, cached heights and parent
/// links. Returns the largest absolute balance factor seen.
fn check_structure<T, Tree>(tree: &Tree) -> isize
where
    T: Ord + std::fmt::Debug,
    Tree: OrderedTree<T>,
{
    let nodes: Vec<NodeRef<'_, T>> = tree.in_order().collect();
    assert_eq!(nodes.len(), tree.len());
    assert!(nodes.windows(2).all(|w| w[0].value() < w[1].value()));

    let mut worst = 0;
    for node in &nodes {
        let left = node.left().map_or(-1, |n| n.height());
        let right = node.right().map_or(-1, |n| n.height());
        assert_eq!(node.height(), 1 + left.max(right));
        assert_eq!(node.balance_factor(), left - right);
        worst = worst.max((left - right).abs());

        if let Some(child) = node.left() {
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
        }
        if let Some(child) = node.right() {
            assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
        }
        assert_eq!(tree.node(node.id()).map(|n| n.id()), Some(node.id()));
    }

    for traversal in [
        tree.pre_order().count(),
        tree.post_order().count(),
        tree.level_order().count(),
    ] {
        assert_eq!(traversal, tree.len());
    }
    worst
}
