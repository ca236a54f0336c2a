//! Circular dial tracker
//!
//! Simulates a pointer on a dial of `size` positions (100 by default) that
//! turns in response to `L<n>` / `R<n>` commands, counting how often the
//! pointer reaches position 0.
//!
//! The pass-over counting treats a left turn as a right turn in a mirrored
//! frame: reflect the position, turn right, reflect back. In the right-turn
//! frame every wrap past `size` is exactly one visit to zero, so the count is
//! the quotient of `position + magnitude` by `size`.

use crate::config::{CountingMethod, DialConfig};
use crate::types::{Result, SolverError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A single rotation command such as `R32` or `L10`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub direction: Direction,
    /// Number of unit clicks to turn
    pub magnitude: u64,
}

impl Command {
    pub fn left(magnitude: u64) -> Self {
        Self {
            direction: Direction::Left,
            magnitude,
        }
    }

    pub fn right(magnitude: u64) -> Self {
        Self {
            direction: Direction::Right,
            magnitude,
        }
    }
}

impl FromStr for Command {
    type Err = SolverError;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let direction = match chars.next() {
            Some('L') => Direction::Left,
            Some('R') => Direction::Right,
            Some(other) => {
                return Err(SolverError::command(
                    token,
                    format!("unknown direction {:?}, expected 'L' or 'R'", other),
                ))
            }
            None => return Err(SolverError::command(token, "empty command")),
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SolverError::command(
                token,
                "magnitude must be a non-negative integer",
            ));
        }
        let magnitude = digits
            .parse::<u64>()
            .map_err(|e| SolverError::command(token, e.to_string()))?;

        Ok(Self {
            direction,
            magnitude,
        })
    }
}

/// Parse whitespace-separated rotation commands
///
/// Fails on the first malformed token.
pub fn parse_commands(input: &str) -> Result<Vec<Command>> {
    input.split_whitespace().map(Command::from_str).collect()
}

/// Dial state: pointer position plus the running passcode
#[derive(Debug, Clone)]
pub struct Dial {
    position: u64,
    size: u64,
    method: CountingMethod,
    passcode: u128,
}

impl Dial {
    /// Create a dial from its configuration
    pub fn new(config: &DialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            position: config.start,
            size: config.size,
            method: config.method,
            passcode: 0,
        })
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn passcode(&self) -> u128 {
        self.passcode
    }

    /// Apply one command, returning the zero events it produced
    pub fn rotate(&mut self, command: &Command) -> u64 {
        let hits = match self.method {
            CountingMethod::PassOverZero => self.turn_counting_passes(command),
            CountingMethod::EndOnZero => self.turn_counting_landings(command),
        };
        self.passcode += u128::from(hits);

        log::trace!(
            "{:?} {} -> position {}, +{} (passcode {})",
            command.direction,
            command.magnitude,
            self.position,
            hits,
            self.passcode
        );
        hits
    }

    /// Apply every command in order and return the final passcode
    pub fn run<'a, I>(&mut self, commands: I) -> u128
    where
        I: IntoIterator<Item = &'a Command>,
    {
        for command in commands {
            self.rotate(command);
        }
        self.passcode
    }

    fn reflect(&self, position: u64) -> u64 {
        (self.size - position) % self.size
    }

    fn turn_counting_passes(&mut self, command: &Command) -> u64 {
        let mirrored = command.direction == Direction::Left;
        let position = if mirrored {
            self.reflect(self.position)
        } else {
            self.position
        };

        // Split off full turns first; the partial turn adds at most one more visit.
        let full_turns = command.magnitude / self.size;
        let remainder = command.magnitude % self.size;
        let (wraps, landed) = self.advance(position, remainder);
        let hits = full_turns + wraps;

        self.position = if mirrored { self.reflect(landed) } else { landed };
        hits
    }

    fn turn_counting_landings(&mut self, command: &Command) -> u64 {
        let remainder = command.magnitude % self.size;
        let step = match command.direction {
            Direction::Right => remainder,
            Direction::Left => self.reflect(remainder),
        };
        let (_, landed) = self.advance(self.position, step);
        self.position = landed;
        u64::from(landed == 0)
    }

    /// Move `steps < size` clicks clockwise; returns (wrapped past zero, new position)
    fn advance(&self, position: u64, steps: u64) -> (u64, u64) {
        let total = u128::from(position) + u128::from(steps);
        let size = u128::from(self.size);
        // Both operands are below size, so the quotient is 0 or 1.
        ((total / size) as u64, (total % size) as u64)
    }
}

/// Run a full command sequence on a fresh dial and return the passcode
pub fn count_passcode(commands: &[Command], config: &DialConfig) -> Result<u128> {
    let mut dial = Dial::new(config)?;
    let passcode = dial.run(commands);
    log::debug!(
        "Processed {} commands, final position {}, passcode {}",
        commands.len(),
        dial.position(),
        passcode
    );
    Ok(passcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "L68 L30 R48 L5 R60 L55 L1 L99 R14 L82";

    fn dial_at(start: u64) -> Dial {
        Dial::new(&DialConfig {
            start,
            ..DialConfig::default()
        })
        .unwrap()
    }

    fn landing_config() -> DialConfig {
        DialConfig {
            method: CountingMethod::EndOnZero,
            ..DialConfig::default()
        }
    }

    #[test]
    fn test_parse_commands() {
        let commands = parse_commands("R32 L10\n R5\t").unwrap();
        assert_eq!(
            commands,
            vec![Command::right(32), Command::left(10), Command::right(5)]
        );
        assert!(parse_commands("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for token in ["X5", "L", "R-3", "R+3", "l5", "R1.5"] {
            match token.parse::<Command>() {
                Err(SolverError::InvalidCommand { token: t, .. }) => assert_eq!(t, token),
                other => panic!("{token}: expected InvalidCommand, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_zero_magnitude_is_noop() {
        let commands = parse_commands("R0 L0 R0 L0").unwrap();
        let mut dial = dial_at(50);
        assert_eq!(dial.run(&commands), 0);
        assert_eq!(dial.position(), 50);

        let mut dial = dial_at(0);
        assert_eq!(dial.run(&commands), 0);
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_right_to_zero() {
        let mut dial = dial_at(50);
        assert_eq!(dial.rotate(&Command::right(50)), 1);
        assert_eq!(dial.position(), 0);
        assert_eq!(dial.passcode(), 1);
    }

    #[test]
    fn test_multiple_wraps() {
        let mut dial = dial_at(50);
        assert_eq!(dial.rotate(&Command::right(150)), 2);
        assert_eq!(dial.position(), 0);

        let mut dial = dial_at(50);
        assert_eq!(dial.rotate(&Command::right(1000)), 10);
        assert_eq!(dial.position(), 50);
    }

    #[test]
    fn test_left_turns() {
        let mut dial = dial_at(50);
        assert_eq!(dial.rotate(&Command::left(50)), 1);
        assert_eq!(dial.position(), 0);

        let mut dial = dial_at(50);
        assert_eq!(dial.rotate(&Command::left(150)), 2);
        assert_eq!(dial.position(), 0);

        // Leaving zero is not a visit
        let mut dial = dial_at(0);
        assert_eq!(dial.rotate(&Command::left(5)), 0);
        assert_eq!(dial.position(), 95);
    }

    #[test]
    fn test_left_then_right_restores_position() {
        for start in [0, 1, 37, 50, 99] {
            for n in [0, 1, 49, 50, 99, 100, 101, 250, 1234] {
                let mut dial = dial_at(start);
                let left = dial.rotate(&Command::left(n));
                let mid = dial.position();
                let right = dial.rotate(&Command::right(n));

                assert_eq!(dial.position(), start, "start {start}, n {n}");
                assert_eq!(dial.passcode(), u128::from(left) + u128::from(right));

                let mut fresh = dial_at(mid);
                assert_eq!(fresh.rotate(&Command::right(n)), right);
            }
        }
    }

    #[test]
    fn test_matches_click_by_click_simulation() {
        let commands =
            parse_commands("L68 L30 R48 L5 R60 L55 L1 L99 R14 L82 R300 L250 R1 L1").unwrap();
        let mut position: i64 = 50;
        let mut expected = 0;
        for command in &commands {
            let step = match command.direction {
                Direction::Left => -1,
                Direction::Right => 1,
            };
            for _ in 0..command.magnitude {
                position = (position + step).rem_euclid(100);
                if position == 0 {
                    expected += 1;
                }
            }
        }

        let mut dial = dial_at(50);
        assert_eq!(dial.run(&commands), expected);
        assert_eq!(dial.position() as i64, position);
    }

    #[test]
    fn test_example_sequence() {
        let commands = parse_commands(EXAMPLE).unwrap();
        assert_eq!(count_passcode(&commands, &DialConfig::default()).unwrap(), 6);
        assert_eq!(count_passcode(&commands, &landing_config()).unwrap(), 3);
    }

    #[test]
    fn test_end_on_zero_ignores_passes() {
        let mut dial = Dial::new(&landing_config()).unwrap();
        assert_eq!(dial.rotate(&Command::right(150)), 1);
        assert_eq!(dial.rotate(&Command::right(150)), 0);
        assert_eq!(dial.position(), 50);
        assert_eq!(dial.rotate(&Command::left(250)), 1);
        assert_eq!(dial.position(), 0);
    }

    #[test]
    fn test_huge_magnitude_does_not_overflow() {
        let mut dial = dial_at(99);
        let hits = dial.rotate(&Command::right(u64::MAX));
        assert_eq!(hits, u64::MAX / 100 + (99 + u64::MAX % 100) / 100);
        assert_eq!(dial.position(), (99 + u64::MAX % 100) % 100);
    }

    #[test]
    fn test_passcode_exceeds_u64() {
        let input = vec![format!("R{}", u64::MAX); 200].join(" ");
        let commands = parse_commands(&input).unwrap();

        let mut dial = dial_at(50);
        let mut expected: u128 = 0;
        for command in &commands {
            expected += u128::from(dial.rotate(command));
        }
        assert_eq!(dial.passcode(), expected);
        assert!(dial.passcode() > u128::from(u64::MAX));

        // Size 1 visits zero on every click
        let config = DialConfig {
            start: 0,
            size: 1,
            method: CountingMethod::PassOverZero,
        };
        let passcode = count_passcode(&commands, &config).unwrap();
        assert_eq!(passcode, 200 * u128::from(u64::MAX));
    }

    #[test]
    fn test_custom_dial_size() {
        let config = DialConfig {
            start: 0,
            size: 10,
            method: CountingMethod::PassOverZero,
        };
        let commands = parse_commands("R25 L7").unwrap();
        // R25: 0 -> 5, passing 0 twice. L7: 5 -> 8, passing 0 once.
        assert_eq!(count_passcode(&commands, &config).unwrap(), 3);
    }

    #[test]
    fn test_invalid_dial_config() {
        let config = DialConfig {
            start: 5,
            size: 0,
            method: CountingMethod::PassOverZero,
        };
        assert!(matches!(Dial::new(&config), Err(SolverError::InvalidConfig(_))));
    }
}
