use binary_tree::{Node, Tree};

use std::collections::HashSet;

use crate::{init_logging, Shape};

/// Builds a possibly incomplete tree from a [`Shape`]. Nodes beyond what the shape describes
/// stay leaves.
fn build(shape: &Shape) -> Node<usize> {
    fn grow(node: &mut Node<usize>, shape: &Shape, index: usize, next: &mut usize) {
        let (has_left, has_right) = shape.0.get(index).copied().unwrap_or((false, false));
        if has_left {
            node.set_left(Node::new(*next));
            *next += 1;
        }
        if has_right {
            node.set_right(Node::new(*next));
            *next += 1;
        }
        if let Some(left) = node.left_mut() {
            grow(left, shape, 2 * index + 1, next);
        }
        if let Some(right) = node.right_mut() {
            grow(right, shape, 2 * index + 2, next);
        }
    }

    let mut root = Node::new(0);
    let mut next = 1;
    grow(&mut root, shape, 0, &mut next);
    root
}

#[quickcheck]
fn insertion_order_is_level_order(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.traverse_in_level_order() == xs.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn every_traversal_visits_every_node(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let size = tree.size();

    size == xs.len()
        && tree.traverse_in_level_order().len() == size
        && tree.traverse_in_order().len() == size
        && tree.traverse_pre_order().len() == size
        && tree.traverse_post_order().len() == size
}

#[quickcheck]
fn inserted_tree_is_complete(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.into_iter().collect();

    tree.is_complete()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    init_logging();
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn invert_round_trips(shape: Shape) -> bool {
    init_logging();
    let root = build(&shape);
    let inverted = Tree::invert(Some(&root));
    let restored = Tree::invert(inverted.as_ref());

    Tree::is_mirror(inverted.as_ref(), Some(&root)) && restored.as_ref() == Some(&root)
}

#[quickcheck]
fn invert_reverses_in_order(shape: Shape) -> bool {
    init_logging();
    let root = build(&shape);
    let inverted = root.mirrored();

    let mut in_order = root.traverse_in_order();
    in_order.reverse();
    inverted.traverse_in_order() == in_order
}

#[quickcheck]
fn size_matches_traversals_for_any_shape(shape: Shape) -> bool {
    init_logging();
    let tree = Tree::from(build(&shape));
    let size = tree.size();

    tree.traverse_in_level_order().len() == size
        && tree.traverse_in_order().len() == size
        && Tree::subtree_size(tree.root()) == size
}

#[quickcheck]
fn insertion_fills_gaps_in_any_shape(shape: Shape, xs: Vec<u8>) -> bool {
    init_logging();
    let mut tree = Tree::from(build(&shape));
    let before = tree.size();
    for x in &xs {
        tree.insert_in_level_order(usize::from(*x) + 1000);
    }

    tree.size() == before + xs.len()
        && xs.iter().all(|x| tree.contains(&(usize::from(*x) + 1000)))
}

#[quickcheck]
fn min_height_is_at_most_height(shape: Shape) -> bool {
    let root = build(&shape);

    root.min_height() <= root.height()
}
