//! Simulation output types.

use serde::{Deserialize, Serialize};

use crate::common::{FrameCapacity, PageId};
use crate::policy::PolicyKind;
use crate::simulation::SimulationStats;

/// What happened when one reference was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The page was already resident.
    Hit,
    /// The page was not resident. `evicted` is the victim, if a frame had to
    /// be freed.
    Fault { evicted: Option<PageId> },
}

impl Outcome {
    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault { .. })
    }

    /// The page evicted by this access, if any.
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Outcome::Fault { evicted } => *evicted,
            Outcome::Hit => None,
        }
    }
}

/// One processed trace reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Position in the trace.
    pub index: usize,

    /// Page referenced.
    pub page: PageId,

    pub outcome: Outcome,

    /// Resident pages after the access, in the policy's own order. Only
    /// recorded when the run asked for frame snapshots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<Vec<PageId>>,
}

/// Everything one policy did over one trace.
///
/// Holds one event per trace reference, in trace order. Read-only once the
/// run that produced it has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    policy: PolicyKind,
    capacity: FrameCapacity,
    faults: usize,
    events: Vec<AccessEvent>,
}

impl SimulationResult {
    pub(crate) fn new(
        policy: PolicyKind,
        capacity: FrameCapacity,
        faults: usize,
        events: Vec<AccessEvent>,
    ) -> Self {
        Self {
            policy,
            capacity,
            faults,
            events,
        }
    }

    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    /// Total page faults.
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Per-reference events in trace order.
    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    /// Number of references simulated.
    pub fn references(&self) -> usize {
        self.events.len()
    }

    /// References that found their page resident.
    pub fn hits(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.outcome == Outcome::Hit)
            .count()
    }

    /// Faults that had to evict a resident page.
    pub fn evictions(&self) -> usize {
        self.evicted_pages().count()
    }

    /// Victims in eviction order.
    pub fn evicted_pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.events.iter().filter_map(|e| e.outcome.evicted())
    }

    /// Running fault total after each reference.
    pub fn cumulative_faults(&self) -> Vec<usize> {
        self.events
            .iter()
            .scan(0, |total, event| {
                if event.outcome.is_fault() {
                    *total += 1;
                }
                Some(*total)
            })
            .collect()
    }

    /// Summary counters for reporting.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from(self)
    }
}
