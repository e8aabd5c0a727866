//! Page replacement policies.
//!
//! Every policy implements [`FrameSet`]: the resident pages plus whatever
//! bookkeeping the policy needs to pick a victim.
//!
//! Currently implements:
//! - [`FifoFrameSet`] - evicts the longest-resident page
//! - [`LruFrameSet`] - evicts the least recently used page
//! - [`OptimalFrameSet`] - evicts the page used farthest in the future (Belady)

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, FrameCapacity, PageId};
use crate::trace::Trace;

pub use fifo::FifoFrameSet;
pub use lru::LruFrameSet;
pub use optimal::OptimalFrameSet;

/// The set of resident pages as seen by one replacement policy.
///
/// The simulation driver only asks questions and issues commands through this
/// trait; it never looks at policy-specific state. `index` arguments are the
/// trace position of the reference being processed.
pub trait FrameSet: Send {
    /// Which policy this frame set implements.
    fn kind(&self) -> PolicyKind;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of resident pages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once every frame holds a page.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Whether `page` is resident.
    fn contains(&self, page: PageId) -> bool;

    /// Record a hit on a resident page.
    fn touch(&mut self, page: PageId, index: usize);

    /// Make `page` resident. Only called when there is a free frame.
    fn admit(&mut self, page: PageId, index: usize);

    /// Remove and return the policy's victim, or `None` if nothing is resident.
    fn evict(&mut self) -> Option<PageId>;

    /// Resident pages, in an order that is meaningful for the policy.
    fn resident(&self) -> Vec<PageId>;
}

/// The replacement policies pagesim knows how to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    #[serde(rename = "Optimal")]
    Optimal,
}

impl PolicyKind {
    /// Name used in reports and result files.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Build an empty frame set for this policy.
    ///
    /// The trace is only read by the Optimal policy, which needs to look ahead.
    pub fn frame_set(self, capacity: FrameCapacity, trace: &Trace) -> Box<dyn FrameSet> {
        match self {
            PolicyKind::Fifo => Box::new(FifoFrameSet::new(capacity)),
            PolicyKind::Lru => Box::new(LruFrameSet::new(capacity)),
            PolicyKind::Optimal => Box::new(OptimalFrameSet::new(capacity, trace)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
