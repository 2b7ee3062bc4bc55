//! Arena-backed binary tree with cursor-style position navigation.
//!
//! External code addresses tree locations only through [`Position`]
//! cursors; the tree itself is the sole mutator. Nodes live in a
//! generational arena, so a stale cursor fails lookup instead of
//! dangling.

pub mod errors;
pub mod node;
pub mod position;
pub mod tree;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use node::Side;
pub use position::Position;
pub use tree::BinTree;
