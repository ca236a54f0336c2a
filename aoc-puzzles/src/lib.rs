//! AoC Puzzles Library
//!
//! A stateless library for two small puzzle computations:
//! - **Dial tracker**: turns a 100-position dial through `L<n>`/`R<n>`
//!   commands and counts how often the pointer reaches zero
//! - **Invalid-ID summer**: sums the IDs inside `start-end` ranges whose
//!   digits are a block repeated, without enumerating the ranges
//!
//! The library does NOT:
//! - Print anything (it logs through the `log` facade)
//! - Parse command lines or configuration files
//!
//! Both are in the application layer (aoc-cli).
//!
//! # Example Usage
//!
//! ```
//! use aoc_puzzles::{Answer, CountingMethod, Solver, SolverConfig};
//!
//! let solver = Solver::new();
//! let answer = solver.solve_dial("L68 L30 R48 L5 R60 L55 L1 L99 R14 L82").unwrap();
//! assert_eq!(answer.to_string(), "Passcode: 6");
//!
//! // Only count rotations that stop on zero
//! let config = SolverConfig::new().with_counting_method(CountingMethod::EndOnZero);
//! let answer = Solver::with_config(config)
//!     .solve_dial("L68 L30 R48 L5 R60 L55 L1 L99 R14 L82")
//!     .unwrap();
//! assert_eq!(answer, Answer::Passcode(3));
//! ```

// Public modules
pub mod config;
pub mod dial;
pub mod ids;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use config::{CountingMethod, DialConfig, IdConfig, RepeatRule, SolverConfig};
pub use dial::{Command, Dial, Direction};
pub use ids::IdRange;
pub use solver::{Puzzle, Solver};
pub use types::{Answer, Result, SolverError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
