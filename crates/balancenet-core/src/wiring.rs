//! Immutable per-node routing: where the low and high tokens go.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Where a routed token lands: another node or a numbered output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Hand the token to another node.
    Node(u32),
    /// Deposit the token in an output slot.
    Output(usize),
}

impl Destination {
    /// The destination node id, if this routes to a node.
    pub fn node_id(self) -> Option<u32> {
        match self {
            Destination::Node(id) => Some(id),
            Destination::Output(_) => None,
        }
    }
}

/// The fixed `(low, high)` destination pair of each node.
///
/// Wiring is declared exactly once per node at build time and never
/// changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct WiringTable {
    routes: HashMap<u32, (Destination, Destination)>,
}

impl WiringTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the routing for node `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateWiring`] if the node's routing was
    /// already declared.
    pub fn set_wiring(&mut self, id: u32, low: Destination, high: Destination) -> Result<()> {
        if self.routes.contains_key(&id) {
            return Err(Error::DuplicateWiring(id));
        }
        self.routes.insert(id, (low, high));
        Ok(())
    }

    /// Routing for node `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingWiring`] if no routing was declared. A
    /// ready node without wiring means the input was incomplete; this is
    /// not a recoverable condition.
    pub fn wiring_of(&self, id: u32) -> Result<(Destination, Destination)> {
        self.routes.get(&id).copied().ok_or(Error::MissingWiring(id))
    }

    /// Highest output slot referenced by any declared route.
    pub fn max_output_slot(&self) -> Option<usize> {
        self.routes
            .values()
            .flat_map(|&(low, high)| [low, high])
            .filter_map(|destination| match destination {
                Destination::Output(slot) => Some(slot),
                Destination::Node(_) => None,
            })
            .max()
    }

    /// Number of nodes with declared routing.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routing has been declared.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
