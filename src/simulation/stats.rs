//! Summary statistics for a finished simulation.

use std::fmt;

use serde::Serialize;

use crate::policy::PolicyKind;
use crate::simulation::SimulationResult;

/// A summary of one policy run.
///
/// Derived from a [`SimulationResult`]; copying it around is cheap, so it is
/// what reports and sinks work with.
///
/// # Example
/// ```
/// use pagesim::{simulation, FrameCapacity, PolicyKind, Trace};
///
/// let trace = Trace::parse("1 2 1 3").unwrap();
/// let result = simulation::run(&trace, FrameCapacity::from(2), PolicyKind::Fifo);
/// let stats = result.stats();
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationStats {
    pub policy: PolicyKind,
    pub references: usize,
    pub hits: usize,
    pub faults: usize,
    pub evictions: usize,
}

impl SimulationStats {
    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl From<&SimulationResult> for SimulationStats {
    fn from(result: &SimulationResult) -> Self {
        Self {
            policy: result.policy(),
            references: result.references(),
            hits: result.hits(),
            faults: result.faults(),
            evictions: result.evictions(),
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.policy,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
