//! The instruction grammar that wires and seeds a network.
//!
//! Two line forms are understood:
//!
//! ```text
//! value 5 goes to bot 2
//! bot 2 gives low to bot 1 and high to output 0
//! ```
//!
//! The first injects an initial token, the second declares a node's
//! low/high routing. Anything else is rejected.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::wiring::Destination;

static INJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^value (\d+) goes to bot (\d+)$").unwrap());

static WIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^bot (\d+) gives low to (bot|output) (\d+) and high to (bot|output) (\d+)$")
        .unwrap()
});

/// One parsed instruction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Seed `node` with a token of `value` once all wiring is in place.
    Inject { value: u64, node: u32 },
    /// Declare where `node` routes its low and high tokens.
    Wire {
        node: u32,
        low: Destination,
        high: Destination,
    },
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        if let Some(caps) = INJECT_RE.captures(line) {
            return Ok(Instruction::Inject {
                value: parse_number(&caps[1], line)?,
                node: parse_number(&caps[2], line)?,
            });
        }
        if let Some(caps) = WIRE_RE.captures(line) {
            return Ok(Instruction::Wire {
                node: parse_number(&caps[1], line)?,
                low: parse_destination(&caps[2], &caps[3], line)?,
                high: parse_destination(&caps[4], &caps[5], line)?,
            });
        }
        Err(Error::InvalidInstruction(line.to_string()))
    }
}

/// Digits are guaranteed by the grammar; only overflow can fail here.
fn parse_number<T: FromStr>(digits: &str, line: &str) -> Result<T> {
    digits
        .parse()
        .map_err(|_| Error::InvalidInstruction(line.to_string()))
}

fn parse_destination(kind: &str, digits: &str, line: &str) -> Result<Destination> {
    if kind == "bot" {
        Ok(Destination::Node(parse_number(digits, line)?))
    } else {
        Ok(Destination::Output(parse_number(digits, line)?))
    }
}
