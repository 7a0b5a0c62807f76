//! Error types for ring operations

use thiserror::Error;

/// Ring errors
///
/// Every failing operation leaves the ring exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// No item matched the lookup
    #[error("Item not found")]
    NotFound,

    /// Index past the end of the ring
    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Position refers to a node that was removed or never belonged to this ring
    #[error("Stale position")]
    StalePosition,

    /// Ring was structurally modified while a walker was traversing it
    #[error("Ring modified during traversal (revision {expected}, now {found})")]
    ConcurrentModification { expected: u64, found: u64 },

    /// Walker was created by a different ring
    #[error("Walker belongs to a different ring")]
    WrongRing,

    /// Linkage check failed
    #[error("Ring corrupted: {0}")]
    Corrupted(String),
}

/// Result type for ring operations
pub type Result<T> = std::result::Result<T, RingError>;
