use generational_arena::Index;

use crate::errors::TreeResult;
use crate::tree::BinTree;

/// Copyable cursor addressing one node of a [`BinTree`], or the null
/// sentinel when no node is addressed.
///
/// A position only navigates and reads; all structural mutation goes
/// through the owning tree. Navigation is total: stepping to an absent
/// child or past the root yields the null position, never an error.
/// Dereference and the structural predicates do fail on the null
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(Option<Index>);

impl From<Index> for Position {
    fn from(idx: Index) -> Self {
        Position(Some(idx))
    }
}

impl Position {
    /// The null sentinel.
    pub fn null() -> Self {
        Position(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn index(&self) -> Option<Index> {
        self.0
    }

    /// Position of the left child, or null when absent.
    pub fn left<T>(self, tree: &BinTree<T>) -> Position {
        match tree.node(self) {
            Ok(node) => Position(node.left),
            Err(_) => Position::null(),
        }
    }

    /// Position of the right child, or null when absent.
    pub fn right<T>(self, tree: &BinTree<T>) -> Position {
        match tree.node(self) {
            Ok(node) => Position(node.right),
            Err(_) => Position::null(),
        }
    }

    /// Position of the parent, or null when `self` is the root.
    pub fn parent<T>(self, tree: &BinTree<T>) -> Position {
        match tree.node(self) {
            Ok(node) => Position(node.parent),
            Err(_) => Position::null(),
        }
    }

    /// True iff the addressed node has neither child.
    pub fn is_external<T>(self, tree: &BinTree<T>) -> TreeResult<bool> {
        tree.node(self).map(|node| node.is_external())
    }

    /// True iff the addressed node has no parent.
    pub fn is_root<T>(self, tree: &BinTree<T>) -> TreeResult<bool> {
        tree.node(self).map(|node| node.parent.is_none())
    }
}
