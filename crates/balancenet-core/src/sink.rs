//! Output sink: terminal slots for routed tokens.

use crate::error::{Error, Result};

/// A fixed-size table of write-once output slots.
///
/// Slots start empty and receive a value at most once; the empty state is
/// explicit rather than a sentinel, so a stored zero is a legitimate
/// token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSink {
    slots: Vec<Option<u64>>,
}

impl OutputSink {
    /// A sink with `len` empty slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sink has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value stored in `slot`, if filled.
    pub fn get(&self, slot: usize) -> Option<u64> {
        self.slots.get(slot).copied().flatten()
    }

    /// Store `value` in `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for a slot outside the sink and
    /// [`Error::OutputConflict`] when the slot already holds a different
    /// value. Re-writing the value already stored is tolerated.
    pub fn write(&mut self, slot: usize, value: u64) -> Result<()> {
        let len = self.slots.len();
        let stored = self
            .slots
            .get_mut(slot)
            .ok_or(Error::OutOfRange { slot, len })?;
        match *stored {
            None => {
                *stored = Some(value);
                Ok(())
            }
            Some(existing) if existing == value => Ok(()),
            Some(existing) => Err(Error::OutputConflict {
                slot,
                existing,
                new: value,
            }),
        }
    }

    /// Whether the first `count` slots are all filled.
    pub fn filled(&self, count: usize) -> bool {
        count <= self.slots.len() && self.slots[..count].iter().all(Option::is_some)
    }

    /// Whether every slot is filled.
    pub fn all_filled(&self) -> bool {
        self.filled(self.slots.len())
    }

    /// Arithmetic product of the first `count` slot values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `count` exceeds the sink and
    /// [`Error::IncompleteOutput`] if any of those slots is still empty.
    pub fn product(&self, count: usize) -> Result<u64> {
        let len = self.slots.len();
        if count > len {
            return Err(Error::OutOfRange {
                slot: count - 1,
                len,
            });
        }
        let mut product = 1u64;
        for (slot, stored) in self.slots[..count].iter().enumerate() {
            match stored {
                Some(value) => product *= value,
                None => return Err(Error::IncompleteOutput(slot)),
            }
        }
        Ok(product)
    }
}
