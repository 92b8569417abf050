//! The live network and its worklist scheduler.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::builder::Builder;
use crate::error::{Error, Result};
use crate::node::{Holdings, Registry};
use crate::sink::OutputSink;
use crate::wiring::{Destination, WiringTable};

/// What a scheduler run is trying to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    /// Stop once a node has been seen holding exactly this sorted pair.
    Match { low: u64, high: u64 },
    /// Stop once the first `count` output slots are filled.
    Outputs { count: usize },
}

/// A wired token network, ready to run.
///
/// The registry, wiring table, and sink are owned exclusively for the
/// lifetime of one simulation; after construction the scheduler is the
/// only thing that mutates them. Queries share that one simulation, so
/// [`Network::find_match`] followed by [`Network::output_product`]
/// continues where the first run left off. Clone the network up front to
/// run independent queries.
#[derive(Debug, Clone)]
pub struct Network {
    registry: Registry,
    wiring: WiringTable,
    sink: OutputSink,
    /// Ids that may hold a full pair, pending a drain.
    ready: VecDeque<u32>,
    /// Total drains an acyclic schedule can never exceed. Tripping it
    /// means tokens are circulating a wiring cycle.
    drain_budget: u64,
    drains: u64,
    matched: Option<u32>,
}

impl Network {
    /// Build a network from instruction text, one instruction per line.
    ///
    /// Blank lines are skipped; leading and trailing whitespace on a
    /// line is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInstruction`] for an unparseable line,
    /// [`Error::DuplicateWiring`] for a redeclared node, and
    /// [`Error::OverfullNode`] if the injections overfill a node.
    pub fn parse(input: &str) -> Result<Self> {
        let mut builder = Builder::new();
        for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
            builder.push_line(line)?;
        }
        builder.finish()
    }

    pub(crate) fn assemble(
        registry: Registry,
        wiring: WiringTable,
        sink: OutputSink,
        injected: u64,
    ) -> Self {
        let ready: VecDeque<u32> = registry.ready_ids().collect();
        let drain_budget = injected * (registry.len() as u64 + 1);
        Self {
            registry,
            wiring,
            sink,
            ready,
            drain_budget,
            drains: 0,
            matched: None,
        }
    }

    /// Holdings of node `id`, if the node exists.
    pub fn holdings(&self, id: u32) -> Option<Holdings> {
        self.registry.holdings(id)
    }

    /// Value settled into output `slot`, if any.
    pub fn output(&self, slot: usize) -> Option<u64> {
        self.sink.get(slot)
    }

    /// Number of output slots the wiring can reach.
    pub fn sink_len(&self) -> usize {
        self.sink.len()
    }

    /// Run the scheduler until some node is seen holding exactly the
    /// pair `{a, b}`, and return that node's id.
    ///
    /// The pair is normalized, so argument order does not matter. The
    /// first node observed with the pair wins; it is still drained and
    /// its tokens routed before the run stops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stalled`] if the network quiesces without the
    /// pair ever appearing, plus any routing error from the run.
    pub fn find_match(&mut self, a: u64, b: u64) -> Result<u32> {
        self.run(Goal::Match {
            low: a.min(b),
            high: a.max(b),
        })?;
        self.matched.ok_or(Error::Stalled)
    }

    /// Run the scheduler until the first `slot_count` output slots are
    /// filled, then return the product of their values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the wiring cannot reach
    /// `slot_count` slots, [`Error::Stalled`] if the network quiesces
    /// with a slot still empty, plus any routing error from the run.
    pub fn output_product(&mut self, slot_count: usize) -> Result<u64> {
        if slot_count > self.sink.len() {
            return Err(Error::OutOfRange {
                slot: slot_count - 1,
                len: self.sink.len(),
            });
        }
        self.run(Goal::Outputs { count: slot_count })?;
        self.sink.product(slot_count)
    }

    fn satisfied(&self, goal: Goal) -> bool {
        match goal {
            Goal::Match { .. } => self.matched.is_some(),
            Goal::Outputs { count } => self.sink.filled(count),
        }
    }

    /// Drain ready nodes until `goal` holds or no progress is possible.
    fn run(&mut self, goal: Goal) -> Result<()> {
        if let Goal::Match { .. } = goal {
            self.matched = None;
        }
        loop {
            if self.satisfied(goal) {
                debug!(?goal, drains = self.drains, "goal reached");
                return Ok(());
            }
            let Some(id) = self.ready.pop_front() else {
                debug!(?goal, drains = self.drains, "worklist empty before goal");
                return Err(Error::Stalled);
            };
            // A node already drained by an earlier entry yields nothing.
            let Some((low, high)) = self.registry.drain(id) else {
                continue;
            };
            self.drains += 1;
            if self.drains > self.drain_budget {
                debug!(
                    drains = self.drains,
                    budget = self.drain_budget,
                    "drain budget exceeded"
                );
                return Err(Error::Stalled);
            }
            let (low_destination, high_destination) = self.wiring.wiring_of(id)?;
            trace!(node = id, low, high, "drain");
            if let Goal::Match {
                low: want_low,
                high: want_high,
            } = goal
            {
                if self.matched.is_none() && low == want_low && high == want_high {
                    self.matched = Some(id);
                }
            }
            self.route(low_destination, low)?;
            self.route(high_destination, high)?;
        }
    }

    fn route(&mut self, destination: Destination, value: u64) -> Result<()> {
        match destination {
            Destination::Node(id) => {
                self.registry.add_token(id, value)?;
                if self.registry.is_ready(id) {
                    self.ready.push_back(id);
                }
            }
            Destination::Output(slot) => self.sink.write(slot, value)?,
        }
        Ok(())
    }
}
