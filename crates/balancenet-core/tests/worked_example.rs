//! End-to-end scenarios over the public API.

use balancenet_core::{Builder, Destination, Error, Instruction, Network};

/// The canonical six-line network.
///
/// Node 1 starts with a value-3 token; node 2 starts with the 2/5 pair.
/// Draining settles 5 into slot 0, 2 into slot 1, and 3 into slot 2.
const EXAMPLE: &str = "value 5 goes to bot 2
bot 2 gives low to bot 1 and high to bot 0
value 3 goes to bot 1
bot 1 gives low to output 1 and high to bot 0
bot 0 gives low to output 2 and high to output 0
value 2 goes to bot 2";

fn network(input: &str) -> Network {
    Network::parse(input).expect("instructions should be valid")
}

#[test]
fn canonical_example_match_then_product() {
    let mut net = network(EXAMPLE);
    assert_eq!(net.find_match(2, 5), Ok(2));
    assert_eq!(net.output_product(3), Ok(30));
    assert_eq!(net.output(0), Some(5));
    assert_eq!(net.output(1), Some(2));
    assert_eq!(net.output(2), Some(3));
}

#[test]
fn canonical_example_product_alone() {
    let mut net = network(EXAMPLE);
    assert_eq!(net.output_product(3), Ok(30));
}

#[test]
fn match_target_order_does_not_matter() {
    let mut net = network(EXAMPLE);
    assert_eq!(net.find_match(5, 2), Ok(2));
}

#[test]
fn instruction_order_does_not_change_the_outcome() {
    let mut reversed: Vec<&str> = EXAMPLE.lines().collect();
    reversed.reverse();

    let mut net = network(&reversed.join("\n"));
    assert_eq!(net.find_match(2, 5), Ok(2));
    assert_eq!(net.output_product(3), Ok(30));
}

#[test]
fn values_may_precede_all_wiring() {
    let (values, wiring): (Vec<&str>, Vec<&str>) = EXAMPLE
        .lines()
        .partition(|line| line.starts_with("value"));

    let mut lines = values;
    lines.extend(wiring);
    let mut net = network(&lines.join("\n"));
    assert_eq!(net.find_match(2, 5), Ok(2));
    assert_eq!(net.output_product(3), Ok(30));
}

#[test]
fn independent_clones_answer_either_query_first() {
    let net = network(EXAMPLE);

    let mut for_match = net.clone();
    assert_eq!(for_match.find_match(2, 5), Ok(2));

    let mut for_product = net;
    assert_eq!(for_product.output_product(3), Ok(30));
    // Fully drained, so the pair can never be observed again.
    assert_eq!(for_product.find_match(2, 5), Err(Error::Stalled));
}

#[test]
fn two_node_cycle_stalls() {
    let mut net = network(
        "value 1 goes to bot 0
         value 2 goes to bot 0
         bot 0 gives low to bot 1 and high to bot 1
         bot 1 gives low to bot 0 and high to bot 0",
    );
    assert_eq!(net.find_match(7, 9), Err(Error::Stalled));
}

#[test]
fn starved_network_stalls() {
    let mut net = network(
        "value 1 goes to bot 0
         bot 0 gives low to output 0 and high to output 1",
    );
    assert_eq!(net.output_product(2), Err(Error::Stalled));
}

#[test]
fn third_injection_is_rejected() {
    let result = Network::parse(
        "value 1 goes to bot 0
         value 2 goes to bot 0
         value 3 goes to bot 0
         bot 0 gives low to output 0 and high to output 1",
    );
    assert_eq!(result.err(), Some(Error::OverfullNode(0)));
}

#[test]
fn undeclared_node_with_a_full_pair_is_fatal() {
    let mut net = network(
        "value 1 goes to bot 9
         value 2 goes to bot 9",
    );
    assert_eq!(net.find_match(1, 2), Err(Error::MissingWiring(9)));
}

#[test]
fn duplicate_wiring_is_rejected_at_parse() {
    let result = Network::parse(
        "bot 0 gives low to output 0 and high to output 1
         bot 0 gives low to output 1 and high to output 0",
    );
    assert_eq!(result.err(), Some(Error::DuplicateWiring(0)));
}

#[test]
fn malformed_line_is_rejected_at_parse() {
    let result = Network::parse("value 5 goes to output 2");
    assert_eq!(
        result.err(),
        Some(Error::InvalidInstruction("value 5 goes to output 2".into()))
    );
}

/// A cascade: every node holds one seeded token and waits for the high
/// token travelling down the chain.
fn chain_instructions(len: u32) -> Vec<Instruction> {
    let mut instructions = vec![
        Instruction::Inject { value: 2, node: 0 },
        Instruction::Inject { value: 3, node: 0 },
    ];
    for node in 1..len {
        instructions.push(Instruction::Inject { value: 1, node });
    }
    for node in 0..len - 1 {
        instructions.push(Instruction::Wire {
            node,
            low: Destination::Output(node as usize),
            high: Destination::Node(node + 1),
        });
    }
    instructions.push(Instruction::Wire {
        node: len - 1,
        low: Destination::Output(len as usize - 1),
        high: Destination::Output(len as usize),
    });
    instructions
}

fn chain_network(len: u32) -> Network {
    let mut builder = Builder::new();
    for instruction in chain_instructions(len) {
        builder.push(instruction).expect("chain should wire cleanly");
    }
    builder.finish().expect("chain should seed cleanly")
}

#[test]
fn long_chain_terminates_and_settles() {
    let len = 64;
    let mut net = chain_network(len);
    // Slot 0 takes the 2; slots 1..len-1 take the seeded 1s; the 3
    // rides the chain into the last two slots.
    assert_eq!(net.output_product(len as usize + 1), Ok(2 * 3));
    assert_eq!(net.output(0), Some(2));
    assert_eq!(net.output(len as usize), Some(3));
    for slot in 1..len as usize {
        assert_eq!(net.output(slot), Some(1));
    }
}

#[test]
fn chain_match_is_found_mid_cascade() {
    let mut net = chain_network(16);
    // The travelling 3 pairs with the seeded 1 at every interior node;
    // the first observation wins.
    assert_eq!(net.find_match(1, 3), Ok(1));
}
