use thiserror::Error;

use crate::node::Side;

/// Errors raised by invalid tree operations.
///
/// Every violated precondition surfaces immediately; operations never
/// overwrite or detach existing structure to recover.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("root node already exists")]
    RootOccupied,

    #[error("tree is empty")]
    EmptyTree,

    #[error("position does not address a node")]
    NullPosition,

    #[error("position refers to a node no longer in this tree")]
    StalePosition,

    #[error("{0} child slot already occupied")]
    SlotOccupied(Side),
}

pub type TreeResult<T> = Result<T, TreeError>;
