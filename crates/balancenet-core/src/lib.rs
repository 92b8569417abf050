//! Worklist simulation for statically wired token-balancing networks.
//!
//! A network is a directed graph of processing nodes that each hold up
//! to two integer tokens. Once a node holds a full pair it hands the
//! lower token to its low destination and the higher token to its high
//! destination; a destination is either another node or a numbered
//! output slot. The scheduler drains ready nodes until a caller-chosen
//! goal is reached or no further progress is possible.
//!
//! Key properties:
//!
//! - **Static wiring** — each node's destination pair is declared
//!   exactly once, and all wiring exists before any token moves
//! - **Sorted pairs** — a full node always knows which of its tokens is
//!   low and which is high
//! - **Confluent routing** — a node's readiness depends only on its own
//!   token count, so the drain order cannot change the final slot values
//!   or the match result
//! - **Fail fast** — overfull nodes, missing or duplicated wiring,
//!   output conflicts, and stalls abort the run with a typed error
//!
//! # Example
//!
//! ```
//! use balancenet_core::Network;
//!
//! let mut network = Network::parse(
//!     "value 5 goes to bot 2\n\
//!      bot 2 gives low to bot 1 and high to bot 0\n\
//!      value 3 goes to bot 1\n\
//!      bot 1 gives low to output 1 and high to bot 0\n\
//!      bot 0 gives low to output 2 and high to output 0\n\
//!      value 2 goes to bot 2",
//! )?;
//!
//! // Node 2 is the one that compares the 2/5 pair.
//! assert_eq!(network.find_match(2, 5)?, 2);
//!
//! // Drain the rest and multiply the three output slots.
//! assert_eq!(network.output_product(3)?, 30);
//! # Ok::<(), balancenet_core::Error>(())
//! ```

pub mod builder;
pub mod error;
pub mod instruction;
pub mod net;
pub mod node;
pub mod sink;
pub mod wiring;

pub use builder::Builder;
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use net::Network;
pub use node::{Holdings, Registry};
pub use sink::OutputSink;
pub use wiring::{Destination, WiringTable};
