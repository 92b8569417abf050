//! Two-phase network construction.
//!
//! Wiring takes effect as instructions arrive; initial token injections
//! are deferred until every routing declaration has been seen. No node
//! can therefore become ready before its wiring exists, regardless of
//! the order the instruction lines appear in.

use tracing::debug;

use crate::error::Result;
use crate::instruction::Instruction;
use crate::net::Network;
use crate::node::Registry;
use crate::sink::OutputSink;
use crate::wiring::WiringTable;

/// Collects instructions and finishes into a runnable [`Network`].
#[derive(Debug, Default)]
pub struct Builder {
    registry: Registry,
    wiring: WiringTable,
    injections: Vec<(u32, u64)>,
}

impl Builder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single instruction.
    ///
    /// [`Instruction::Wire`] takes effect immediately, creating the node
    /// and both node destinations if they are not known yet.
    /// [`Instruction::Inject`] is queued for [`Builder::finish`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateWiring`] if the node's routing
    /// was already declared.
    pub fn push(&mut self, instruction: Instruction) -> Result<()> {
        match instruction {
            Instruction::Wire { node, low, high } => {
                self.wiring.set_wiring(node, low, high)?;
                self.registry.ensure(node);
                for destination in [low, high] {
                    if let Some(id) = destination.node_id() {
                        self.registry.ensure(id);
                    }
                }
            }
            Instruction::Inject { value, node } => {
                self.injections.push((node, value));
            }
        }
        Ok(())
    }

    /// Parse and feed a single instruction line.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.push(line.parse()?)
    }

    /// Apply the queued injections and hand over the finished network.
    ///
    /// The sink is sized by the highest output slot the wiring mentions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OverfullNode`] if the injections put a
    /// third token into some node.
    pub fn finish(mut self) -> Result<Network> {
        for &(node, value) in &self.injections {
            self.registry.add_token(node, value)?;
        }
        let slots = self.wiring.max_output_slot().map_or(0, |slot| slot + 1);
        debug!(
            nodes = self.registry.len(),
            injections = self.injections.len(),
            slots,
            "network built"
        );
        Ok(Network::assemble(
            self.registry,
            self.wiring,
            OutputSink::new(slots),
            self.injections.len() as u64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::node::Holdings;
    use crate::wiring::Destination;

    #[test]
    fn wiring_creates_all_referenced_nodes() {
        let mut builder = Builder::new();
        builder
            .push(Instruction::Wire {
                node: 2,
                low: Destination::Node(1),
                high: Destination::Node(0),
            })
            .unwrap();
        let network = builder.finish().unwrap();
        assert_eq!(network.holdings(0), Some(Holdings::Empty));
        assert_eq!(network.holdings(1), Some(Holdings::Empty));
        assert_eq!(network.holdings(2), Some(Holdings::Empty));
    }

    #[test]
    fn duplicate_wiring_is_rejected_on_push() {
        let mut builder = Builder::new();
        builder
            .push_line("bot 0 gives low to output 0 and high to output 1")
            .unwrap();
        assert_eq!(
            builder.push_line("bot 0 gives low to bot 1 and high to bot 2"),
            Err(Error::DuplicateWiring(0))
        );
    }

    #[test]
    fn injections_apply_at_finish() {
        let mut builder = Builder::new();
        builder.push_line("value 3 goes to bot 1").unwrap();
        builder.push_line("value 7 goes to bot 1").unwrap();
        builder
            .push_line("bot 1 gives low to output 0 and high to output 1")
            .unwrap();
        let network = builder.finish().unwrap();
        assert_eq!(network.holdings(1), Some(Holdings::Two { low: 3, high: 7 }));
    }

    #[test]
    fn a_third_injection_fails_finish() {
        let mut builder = Builder::new();
        for line in [
            "value 1 goes to bot 0",
            "value 2 goes to bot 0",
            "value 3 goes to bot 0",
            "bot 0 gives low to output 0 and high to output 1",
        ] {
            builder.push_line(line).unwrap();
        }
        assert_eq!(builder.finish().err(), Some(Error::OverfullNode(0)));
    }

    #[test]
    fn parse_errors_surface_from_push_line() {
        let mut builder = Builder::new();
        assert_eq!(
            builder.push_line("bot 0 explodes"),
            Err(Error::InvalidInstruction("bot 0 explodes".to_string()))
        );
    }

    #[test]
    fn sink_is_sized_by_the_wiring() {
        let mut builder = Builder::new();
        builder
            .push_line("bot 0 gives low to output 4 and high to bot 1")
            .unwrap();
        let network = builder.finish().unwrap();
        assert_eq!(network.sink_len(), 5);

        let network = Builder::new().finish().unwrap();
        assert_eq!(network.sink_len(), 0);
    }
}
