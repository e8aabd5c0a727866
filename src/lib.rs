//! pagesim - A page replacement simulator.
//!
//! Given a reference trace and a number of physical frames, pagesim replays
//! the trace against several replacement policies and reports, per policy,
//! how many page faults occur and which page was evicted at each fault.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input adapters (trace parsing, CLI, config)      │   │
//! │  │        Trace::parse → SimulationConfig::new             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (simulation/)                   │   │
//! │  │     Simulator → run/drive → SimulationResult + Stats    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Policies (policy/)  [FrameSet]             │   │
//! │  │               FIFO  |  LRU  |  Optimal                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Output collaborators (report/)             │   │
//! │  │      ResultSink (file, memory) + text/CSV/JSON          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameCapacity, Error, config)
//! - [`trace`] - Reference traces
//! - [`policy`] - Replacement policies behind the [`FrameSet`] trait
//! - [`simulation`] - The fault-counting driver
//! - [`report`] - Result sinks and output formats
//!
//! # Quick Start
//! ```
//! use pagesim::report::{record_all, MemorySink};
//! use pagesim::{PolicyKind, SimulationConfig, Simulator, Trace};
//!
//! let trace = Trace::parse("1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5").unwrap();
//! let simulator = Simulator::new(SimulationConfig::with_default_policies(3).unwrap());
//! let results = simulator.run(&trace);
//!
//! let sink = MemorySink::new();
//! record_all(&sink, &results).unwrap();
//! assert_eq!(
//!     sink.records(),
//!     vec![(PolicyKind::Fifo, 9), (PolicyKind::Lru, 10), (PolicyKind::Optimal, 7)]
//! );
//! ```

pub mod common;
pub mod logging;
pub mod policy;
pub mod report;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCapacity, PageId, Result, SimulationConfig};
pub use policy::{FrameSet, PolicyKind};
pub use simulation::{AccessEvent, Outcome, SimulationResult, SimulationStats, Simulator};
pub use trace::Trace;
