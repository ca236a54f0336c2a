//! Step-by-step dial trace
//!
//! Prints the pointer position and zero hits after every command, for both
//! counting methods side by side.
//!
//! Usage:
//!   trace_dial <input.txt> [--limit <count>]

use aoc_puzzles::dial::parse_commands;
use aoc_puzzles::{CountingMethod, Dial, DialConfig};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.txt> [--limit <count>]", args[0]);
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let mut limit = usize::MAX;
    let mut i = 2;
    while i < args.len() {
        if args[i] == "--limit" && i + 1 < args.len() {
            limit = args[i + 1].parse()?;
            i += 2;
        } else {
            eprintln!("Unknown argument: {}", args[i]);
            std::process::exit(1);
        }
    }

    let input = std::fs::read_to_string(&path)?;
    let commands = parse_commands(&input)?;

    let mut passing = Dial::new(&DialConfig::default())?;
    let mut landing = Dial::new(&DialConfig {
        method: CountingMethod::EndOnZero,
        ..DialConfig::default()
    })?;

    println!("{:>6}  {:>10}  {:>8}  {:>6}  {:>6}", "#", "command", "position", "pass", "land");
    for (index, command) in commands.iter().take(limit).enumerate() {
        let passes = passing.rotate(command);
        let lands = landing.rotate(command);
        println!(
            "{:>6}  {:>10}  {:>8}  {:>6}  {:>6}",
            index + 1,
            format!("{:?} {}", command.direction, command.magnitude),
            passing.position(),
            passes,
            lands
        );
    }

    println!("\nPasscode (pass over zero): {}", passing.passcode());
    println!("Passcode (end on zero):    {}", landing.passcode());
    Ok(())
}
