//! Contract-violation errors shared by every structure in the crate.

/// Errors reported when a caller breaks an operation’s precondition.
///
/// A structure that returns one of these is left exactly as it was before
/// the call.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The item is already present in the heap or forest.
    #[error("item is already present")]
    DuplicateItem,

    /// The heap does not contain the item.
    #[error("no such item in the queue")]
    NoSuchItem,

    /// The forest never registered the item.
    #[error("item was never registered with make_set")]
    UnknownItem,

    /// Peek or remove on an empty heap.
    #[error("the queue is empty")]
    EmptyQueue,

    /// Dijkstra met a negative or NaN edge weight.
    #[error("invalid edge weight: {0}")]
    InvalidWeight(f64),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
