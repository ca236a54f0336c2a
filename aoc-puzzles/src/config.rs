//! Solver configuration types
//!
//! Both solvers default to the authoritative puzzle rules. The knobs here
//! select the supplementary variants and tune the dial geometry.

use crate::types::{Result, SolverError};
use serde::{Deserialize, Serialize};

/// Configuration for the solver library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Dial tracker settings
    #[serde(default)]
    pub dial: DialConfig,

    /// Invalid-ID range summer settings
    #[serde(default)]
    pub ids: IdConfig,
}

/// How the dial tracker counts zero events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingMethod {
    /// Count every time a rotation lands on or passes over zero
    #[default]
    PassOverZero,
    /// Count only rotations that finish on zero
    EndOnZero,
}

/// Which digit patterns make an ID invalid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatRule {
    /// A block of digits repeated exactly twice (`6464`)
    #[default]
    Twice,
    /// A block of digits repeated two or more times (`646464`, `1111111`)
    AtLeastTwice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialConfig {
    /// Starting position of the pointer (default: 50)
    #[serde(default = "default_start")]
    pub start: u64,

    /// Number of positions on the dial (default: 100)
    #[serde(default = "default_size")]
    pub size: u64,

    #[serde(default)]
    pub method: CountingMethod,
}

fn default_start() -> u64 {
    50
}

fn default_size() -> u64 {
    100
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            size: default_size(),
            method: CountingMethod::default(),
        }
    }
}

impl DialConfig {
    /// Check that the start position lies on the dial
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(SolverError::InvalidConfig(
                "dial size must be at least 1".to_string(),
            ));
        }
        if self.start >= self.size {
            return Err(SolverError::InvalidConfig(format!(
                "dial start {} is outside a dial of size {}",
                self.start, self.size
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdConfig {
    #[serde(default)]
    pub rule: RepeatRule,

    /// Coalesce overlapping ranges so each ID is summed once.
    /// Off by default: overlapping ranges count shared IDs once per range.
    #[serde(default)]
    pub merge_overlaps: bool,
}

impl SolverConfig {
    /// Create a new solver configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the dial starting position
    pub fn with_dial_start(mut self, start: u64) -> Self {
        self.dial.start = start;
        self
    }

    /// Builder method: set the number of dial positions
    pub fn with_dial_size(mut self, size: u64) -> Self {
        self.dial.size = size;
        self
    }

    /// Builder method: select how zero events are counted
    pub fn with_counting_method(mut self, method: CountingMethod) -> Self {
        self.dial.method = method;
        self
    }

    /// Builder method: select the invalid-ID repeat rule
    pub fn with_repeat_rule(mut self, rule: RepeatRule) -> Self {
        self.ids.rule = rule;
        self
    }

    /// Builder method: merge overlapping ranges before summing
    pub fn with_merged_overlaps(mut self, enabled: bool) -> Self {
        self.ids.merge_overlaps = enabled;
        self
    }
}
