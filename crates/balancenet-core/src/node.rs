//! Node registry: the live token holdings of every processing node.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Token holdings of a single node.
///
/// A node holds zero, one, or two tokens. A full pair is kept sorted so
/// the low and high destinations always receive the right value; the
/// ordering is restored on every insertion, not merely checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Holdings {
    /// No tokens.
    #[default]
    Empty,
    /// A single token, waiting for its partner.
    One(u64),
    /// A full pair with `low <= high`. The node is ready.
    Two { low: u64, high: u64 },
}

impl Holdings {
    /// Whether this is a full pair.
    pub fn is_ready(self) -> bool {
        matches!(self, Holdings::Two { .. })
    }
}

/// The set of processing nodes, keyed by id.
///
/// Nodes are stored in id order so that seeding the scheduler's worklist
/// is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    nodes: BTreeMap<u32, Holdings>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the node if absent. Existing holdings are untouched, so a
    /// node may be referenced as a destination before its own wiring
    /// instruction is seen.
    pub fn ensure(&mut self, id: u32) {
        self.nodes.entry(id).or_default();
    }

    /// Insert a token into node `id`, creating the node if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverfullNode`] if the node already holds two
    /// tokens; the stored pair is left untouched.
    pub fn add_token(&mut self, id: u32, value: u64) -> Result<()> {
        let holdings = self.nodes.entry(id).or_default();
        *holdings = match *holdings {
            Holdings::Empty => Holdings::One(value),
            Holdings::One(held) => Holdings::Two {
                low: held.min(value),
                high: held.max(value),
            },
            Holdings::Two { .. } => return Err(Error::OverfullNode(id)),
        };
        Ok(())
    }

    /// Whether node `id` holds exactly two tokens.
    pub fn is_ready(&self, id: u32) -> bool {
        self.nodes.get(&id).copied().is_some_and(Holdings::is_ready)
    }

    /// Take the sorted pair out of a ready node, leaving it empty.
    ///
    /// Returns `None` for absent or non-ready nodes, so stale worklist
    /// entries can be skipped without a separate readiness check.
    pub fn drain(&mut self, id: u32) -> Option<(u64, u64)> {
        let holdings = self.nodes.get_mut(&id)?;
        if let Holdings::Two { low, high } = *holdings {
            *holdings = Holdings::Empty;
            Some((low, high))
        } else {
            None
        }
    }

    /// Holdings of node `id`, if it exists.
    pub fn holdings(&self, id: u32) -> Option<Holdings> {
        self.nodes.get(&id).copied()
    }

    /// Ids of all nodes currently holding a full pair, in id order.
    pub fn ready_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes
            .iter()
            .filter(|(_, holdings)| holdings.is_ready())
            .map(|(&id, _)| id)
    }

    /// Number of known nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes have been created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
