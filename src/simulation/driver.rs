//! The fault-counting simulation loop.

use std::thread;

use log::{debug, info, trace, warn};

use crate::common::{FrameCapacity, SimulationConfig};
use crate::policy::{FrameSet, PolicyKind};
use crate::simulation::{AccessEvent, Outcome, SimulationResult};
use crate::trace::Trace;

/// Simulate one policy over `trace` with `capacity` frames.
///
/// Total and deterministic: every trace is valid, and running the same inputs
/// twice gives identical results. Events carry no frame snapshots; use
/// [`run_with`] to record them.
///
/// # Example
/// ```
/// use pagesim::{simulation, FrameCapacity, PolicyKind, Trace};
///
/// let trace = Trace::parse("1,2,3,4,1,2,5,1,2,3,4,5").unwrap();
/// let result = simulation::run(&trace, FrameCapacity::from(3), PolicyKind::Optimal);
/// assert_eq!(result.faults(), 7);
/// ```
pub fn run(trace: &Trace, capacity: FrameCapacity, policy: PolicyKind) -> SimulationResult {
    run_with(trace, capacity, policy, false)
}

/// Like [`run`], optionally storing the resident set after every reference.
///
/// Snapshots cost one copy of the resident set per reference, so they are
/// meant for step-by-step reports, not for long traces.
pub fn run_with(
    trace: &Trace,
    capacity: FrameCapacity,
    policy: PolicyKind,
    record_frames: bool,
) -> SimulationResult {
    let mut frames = policy.frame_set(capacity, trace);
    drive_with(trace, frames.as_mut(), record_frames)
}

/// Run `trace` through an existing, empty frame set.
///
/// This is the loop behind [`run`]; it is public so custom [`FrameSet`]
/// implementations can be simulated the same way. The frame set's own
/// capacity is the simulated frame count.
///
/// A frame set that looks ahead (such as
/// [`OptimalFrameSet`](crate::policy::OptimalFrameSet)) must have been built
/// from this same `trace`.
pub fn drive(trace: &Trace, frames: &mut dyn FrameSet) -> SimulationResult {
    drive_with(trace, frames, false)
}

/// [`drive`] with optional per-reference frame snapshots.
pub fn drive_with(
    trace: &Trace,
    frames: &mut dyn FrameSet,
    record_frames: bool,
) -> SimulationResult {
    let policy = frames.kind();
    let capacity = FrameCapacity::from(frames.capacity());
    let mut faults = 0;
    let mut events = Vec::with_capacity(trace.len());

    if capacity.is_zero() && !trace.is_empty() {
        warn!("{}: zero frames, every reference will fault", policy);
    }

    for (index, page) in trace.iter().enumerate() {
        let outcome = if capacity.is_zero() {
            faults += 1;
            Outcome::Fault { evicted: None }
        } else if frames.contains(page) {
            trace!("{}: hit on page {} at {}", policy, page, index);
            frames.touch(page, index);
            Outcome::Hit
        } else {
            faults += 1;
            let evicted = if frames.is_full() { frames.evict() } else { None };
            frames.admit(page, index);

            match evicted {
                Some(victim) => debug!(
                    "{}: fault on page {} at {}, evicted page {}",
                    policy, page, index, victim
                ),
                None => debug!("{}: fault on page {} at {}", policy, page, index),
            }
            Outcome::Fault { evicted }
        };

        events.push(AccessEvent {
            index,
            page,
            outcome,
            resident: record_frames.then(|| frames.resident()),
        });
    }

    info!(
        "{}: {} faults over {} references with {}",
        policy,
        faults,
        trace.len(),
        capacity
    );

    SimulationResult::new(policy, capacity, faults, events)
}

/// Runs every policy of a [`SimulationConfig`] over a trace.
///
/// Each policy gets its own fresh frame set; nothing is shared between runs
/// except the read-only trace. Results come back in configured order.
///
/// # Example
/// ```
/// use pagesim::{SimulationConfig, Simulator, Trace};
///
/// let config = SimulationConfig::with_default_policies(3).unwrap();
/// let simulator = Simulator::new(config);
///
/// let trace = Trace::parse("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
/// let faults: Vec<usize> = simulator.run(&trace).iter().map(|r| r.faults()).collect();
/// assert_eq!(faults, vec![9, 10, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    record_frames: bool,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            record_frames: false,
        }
    }

    /// Store the resident set after every reference in each result.
    pub fn with_frame_snapshots(mut self, record_frames: bool) -> Self {
        self.record_frames = record_frames;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run each configured policy in turn.
    pub fn run(&self, trace: &Trace) -> Vec<SimulationResult> {
        let capacity = self.config.capacity();
        self.config
            .policies()
            .iter()
            .map(|&policy| run_with(trace, capacity, policy, self.record_frames))
            .collect()
    }

    /// Run each configured policy on its own thread.
    ///
    /// Produces exactly what [`Simulator::run`] produces.
    pub fn run_parallel(&self, trace: &Trace) -> Vec<SimulationResult> {
        let capacity = self.config.capacity();
        let record_frames = self.record_frames;

        thread::scope(|scope| {
            let handles: Vec<_> = self
                .config
                .policies()
                .iter()
                .map(|&policy| scope.spawn(move || run_with(trace, capacity, policy, record_frames)))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}
