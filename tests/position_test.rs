//! Tests for Position navigation, predicates and the null sentinel

use postree::util::testing;
use postree::{BinTree, Position, TreeError};
use rstest::{fixture, rstest};

//      10
//     /  \
//   20    30
//   /
// 40
#[fixture]
fn tree() -> BinTree<i32> {
    testing::init_test_setup();

    let mut bt = BinTree::new();
    let root = bt.set_root(10).unwrap();
    let left = bt.set_left(root, 20).unwrap();
    bt.set_right(root, 30).unwrap();
    bt.set_left(left, 40).unwrap();
    bt
}

// ============================================================
// Navigation Tests
// ============================================================

#[rstest]
fn given_attached_child_when_navigating_parent_then_round_trip_holds(tree: BinTree<i32>) {
    let root = tree.root().unwrap();
    let left = root.left(&tree);
    let right = root.right(&tree);

    assert_eq!(left.parent(&tree).left(&tree), left);
    assert_eq!(right.parent(&tree).right(&tree), right);
    assert_eq!(left.parent(&tree), root);
}

#[rstest]
fn given_root_when_navigating_parent_then_returns_null(tree: BinTree<i32>) {
    let root = tree.root().unwrap();
    assert!(root.parent(&tree).is_null());
}

#[rstest]
fn given_leaf_when_navigating_children_then_returns_null(tree: BinTree<i32>) {
    let leaf = tree.root().unwrap().left(&tree).left(&tree);
    assert_eq!(*tree.get(leaf).unwrap(), 40);

    assert!(leaf.left(&tree).is_null());
    assert!(leaf.right(&tree).is_null());
}

#[rstest]
fn given_null_position_when_navigating_then_stays_null(tree: BinTree<i32>) {
    let null = Position::null();
    assert!(null.left(&tree).is_null());
    assert!(null.right(&tree).is_null());
    assert!(null.parent(&tree).is_null());
}

// ============================================================
// Predicate Tests
// ============================================================

#[rstest]
fn given_nodes_when_checking_is_external_then_true_only_for_leaves(tree: BinTree<i32>) {
    let root = tree.root().unwrap();
    assert!(!root.is_external(&tree).unwrap());
    assert!(!root.left(&tree).is_external(&tree).unwrap());
    assert!(root.right(&tree).is_external(&tree).unwrap());
    assert!(root.left(&tree).left(&tree).is_external(&tree).unwrap());
}

#[test]
fn given_leaf_when_attaching_first_child_then_is_external_flips() {
    let mut bt = BinTree::new();
    let root = bt.set_root(1).unwrap();
    assert!(root.is_external(&bt).unwrap());

    bt.set_left(root, 2).unwrap();
    assert!(!root.is_external(&bt).unwrap());
}

#[rstest]
fn given_nodes_when_checking_is_root_then_true_only_for_root(tree: BinTree<i32>) {
    let root = tree.root().unwrap();
    assert!(root.is_root(&tree).unwrap());
    assert!(!root.left(&tree).is_root(&tree).unwrap());
    assert!(!root.right(&tree).is_root(&tree).unwrap());
}

// ============================================================
// Null Sentinel Failure Tests
// ============================================================

#[rstest]
fn given_null_position_when_dereferencing_then_fails_without_mutation(tree: BinTree<i32>) {
    let null = tree.root().unwrap().right(&tree).left(&tree);
    assert!(null.is_null());

    assert_eq!(tree.get(null).unwrap_err(), TreeError::NullPosition);
    assert_eq!(tree.size(), 4);
}

#[rstest]
fn given_null_position_when_querying_predicates_then_fails(tree: BinTree<i32>) {
    let null = Position::null();
    assert_eq!(null.is_external(&tree).unwrap_err(), TreeError::NullPosition);
    assert_eq!(null.is_root(&tree).unwrap_err(), TreeError::NullPosition);
}

// ============================================================
// Stale Position Tests
// ============================================================

#[test]
fn given_foreign_position_when_dereferencing_then_fails_stale() {
    let mut other = BinTree::new();
    let other_root = other.set_root(1).unwrap();
    let foreign = other.set_left(other_root, 2).unwrap();

    // A one-node tree has no slot for the foreign index to resolve against
    let mut bt = BinTree::new();
    bt.set_root(10).unwrap();

    assert_eq!(bt.get(foreign).unwrap_err(), TreeError::StalePosition);
    assert_eq!(bt.get_mut(foreign).unwrap_err(), TreeError::StalePosition);
    assert_eq!(
        foreign.is_external(&bt).unwrap_err(),
        TreeError::StalePosition
    );
}

#[test]
fn given_foreign_position_when_attaching_then_fails_without_mutation() {
    let mut other = BinTree::new();
    let other_root = other.set_root(1).unwrap();
    let foreign = other.set_right(other_root, 2).unwrap();

    let mut bt = BinTree::new();
    bt.set_root(10).unwrap();

    assert_eq!(bt.set_left(foreign, 99).unwrap_err(), TreeError::StalePosition);

    assert_eq!(bt.size(), 1);
    assert_eq!(*bt.get(bt.root().unwrap()).unwrap(), 10);
    assert!(bt.root().unwrap().is_external(&bt).unwrap());
}

#[test]
fn given_foreign_position_when_navigating_then_returns_null() {
    let mut other = BinTree::new();
    let other_root = other.set_root(1).unwrap();
    let foreign = other.set_left(other_root, 2).unwrap();

    let mut bt = BinTree::new();
    bt.set_root(10).unwrap();

    // Navigation stays total: an unresolvable cursor degrades to null
    assert!(foreign.left(&bt).is_null());
    assert!(foreign.parent(&bt).is_null());
}

// ============================================================
// Equality Tests
// ============================================================

#[rstest]
fn given_same_node_when_comparing_positions_then_equal(tree: BinTree<i32>) {
    let a = tree.root().unwrap().left(&tree);
    let b = tree.root().unwrap().left(&tree);
    assert_eq!(a, b);

    let c = tree.root().unwrap().right(&tree);
    assert_ne!(a, c);
}

#[test]
fn given_null_positions_when_comparing_then_equal() {
    assert_eq!(Position::null(), Position::null());
    assert!(Position::null().is_null());
}
