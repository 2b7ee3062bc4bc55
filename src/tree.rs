use std::fmt;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::{Node, Side};
use crate::position::Position;

/// Arena-backed binary tree addressed through [`Position`] cursors.
///
/// The tree is the sole mutator: structure changes only through
/// `set_root`/`set_left`/`set_right`, each taking a position as the
/// attachment point. Positions themselves only navigate and read.
///
/// Uses a generational arena for memory-safe node references: a cursor
/// whose node is gone fails arena lookup instead of dangling.
#[derive(Debug)]
pub struct BinTree<T> {
    /// Arena storage for all tree nodes
    arena: Arena<Node<T>>,
    /// Index of the root node, None for the empty tree
    root: Option<Index>,
}

impl<T> Default for BinTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Creates the root node. Fails if a root already exists.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_root(&mut self, value: T) -> TreeResult<Position> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        let idx = self.arena.insert(Node::new(value));
        self.root = Some(idx);
        Ok(Position::from(idx))
    }

    /// Position of the root node. Fails on the empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> TreeResult<Position> {
        self.root.map(Position::from).ok_or(TreeError::EmptyTree)
    }

    /// Attaches a new left child to the node at `pos`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_left(&mut self, pos: Position, value: T) -> TreeResult<Position> {
        self.attach(pos, Side::Left, value)
    }

    /// Attaches a new right child to the node at `pos`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn set_right(&mut self, pos: Position, value: T) -> TreeResult<Position> {
        self.attach(pos, Side::Right, value)
    }

    fn attach(&mut self, pos: Position, side: Side, value: T) -> TreeResult<Position> {
        // Validate before inserting so a failure leaves the arena untouched
        let parent_idx = self.resolve(pos)?;
        if self.arena[parent_idx].child(side).is_some() {
            return Err(TreeError::SlotOccupied(side));
        }

        let child_idx = self.arena.insert(Node::with_parent(value, parent_idx));
        *self.arena[parent_idx].child_mut(side) = Some(child_idx);
        Ok(Position::from(child_idx))
    }

    /// Reference to the value stored at `pos`.
    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, pos: Position) -> TreeResult<&T> {
        self.node(pos).map(|node| &node.value)
    }

    /// Mutable reference to the value stored at `pos`.
    #[instrument(level = "trace", skip(self))]
    pub fn get_mut(&mut self, pos: Position) -> TreeResult<&mut T> {
        let idx = self.resolve(pos)?;
        self.arena
            .get_mut(idx)
            .map(|node| &mut node.value)
            .ok_or(TreeError::StalePosition)
    }

    /// Count of attached nodes. With no removal API this is exactly the
    /// number of successful attach calls.
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn node(&self, pos: Position) -> TreeResult<&Node<T>> {
        let idx = self.resolve(pos)?;
        self.arena.get(idx).ok_or(TreeError::StalePosition)
    }

    fn resolve(&self, pos: Position) -> TreeResult<Index> {
        let idx = pos.index().ok_or(TreeError::NullPosition)?;
        if !self.arena.contains(idx) {
            return Err(TreeError::StalePosition);
        }
        Ok(idx)
    }
}

impl<T: fmt::Display> BinTree<T> {
    /// Renders the tree in pre-order (node, left subtree, right subtree).
    ///
    /// An absent slot under an internal node renders as `∅` so the shape
    /// stays reconstructible from the output.
    pub fn to_tree_string(&self) -> Tree<String> {
        fn build<T: fmt::Display>(tree: &BinTree<T>, idx: Index, out: &mut Tree<String>) {
            if let Some(node) = tree.arena.get(idx) {
                if node.is_external() {
                    return;
                }
                for slot in [node.left, node.right] {
                    match slot.and_then(|child_idx| {
                        tree.arena.get(child_idx).map(|child| (child_idx, child))
                    }) {
                        Some((child_idx, child)) => {
                            let mut child_tree = Tree::new(child.value.to_string());
                            build(tree, child_idx, &mut child_tree);
                            out.push(child_tree);
                        }
                        None => {
                            out.push(Tree::new("∅".to_string()));
                        }
                    }
                }
            }
        }

        match self.root.and_then(|idx| self.arena.get(idx).map(|n| (idx, n))) {
            Some((root_idx, root)) => {
                let mut tree = Tree::new(root.value.to_string());
                build(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }

    /// Writes the rendered tree to stdout. No-op on the empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }
        println!("{}", self);
    }
}

impl<T: fmt::Display> fmt::Display for BinTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}", self.to_tree_string())
    }
}
