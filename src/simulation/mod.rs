//! Simulation of replacement policies over a trace.
//!
//! # Components
//! - [`run`] / [`drive`] - The fault-counting loop for one policy
//!   ([`run_with`] / [`drive_with`] also record frame snapshots)
//! - [`Simulator`] - Runs every policy of a [`SimulationConfig`](crate::SimulationConfig)
//! - [`SimulationResult`] - Per-reference events plus the fault total
//! - [`SimulationStats`] - Summary counters and rates

mod driver;
mod result;
mod stats;

pub use driver::{drive, drive_with, run, run_with, Simulator};
pub use result::{AccessEvent, Outcome, SimulationResult};
pub use stats::SimulationStats;
