use std::fmt;

use generational_arena::Index;

/// Names a child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Tree node in the arena-backed binary tree.
///
/// Links are plain arena indices; the arena owns every node, so parent
/// back-references cannot form ownership cycles.
#[derive(Debug)]
pub struct Node<T> {
    /// Stored element
    pub value: T,
    /// Index of the parent node, None for the root
    pub parent: Option<Index>,
    /// Index of the left child, None when absent
    pub left: Option<Index>,
    /// Index of the right child, None when absent
    pub right: Option<Index>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn with_parent(value: T, parent: Index) -> Self {
        Self {
            value,
            parent: Some(parent),
            left: None,
            right: None,
        }
    }

    /// A node with neither child is external (a leaf).
    pub fn is_external(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
