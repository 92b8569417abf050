//! Error types for network construction and simulation.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or running a network.
///
/// Every variant is fatal. Each one indicates malformed input or a wiring
/// defect, so the run is aborted and partial results are discarded rather
/// than returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An instruction line matched neither grammar form.
    #[error("invalid instruction: {0:?}")]
    InvalidInstruction(String),

    /// A third token was injected into a node already holding two.
    #[error("node {0} already holds two tokens")]
    OverfullNode(u32),

    /// A node's routing was declared more than once.
    #[error("wiring for node {0} declared twice")]
    DuplicateWiring(u32),

    /// A node became ready before its routing was declared.
    #[error("node {0} is ready but has no wiring")]
    MissingWiring(u32),

    /// An output slot index is outside the sink.
    #[error("output slot {slot} out of range (sink holds {len})")]
    OutOfRange { slot: usize, len: usize },

    /// Two different values were written to the same output slot.
    #[error("output slot {slot} already holds {existing}, refusing {new}")]
    OutputConflict {
        slot: usize,
        existing: u64,
        new: u64,
    },

    /// The output product was requested while a slot was still empty.
    #[error("output slot {0} is still empty")]
    IncompleteOutput(usize),

    /// The scheduler ran out of work before its goal was satisfied.
    #[error("network stalled before the goal was reached")]
    Stalled,
}
