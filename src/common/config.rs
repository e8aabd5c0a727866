//! Configuration for pagesim.

use crate::common::{Error, FrameCapacity, Result};
use crate::policy::PolicyKind;

/// File the command-line tool writes `NAME FAULTS` records to.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Frame count used when none is given.
pub const DEFAULT_FRAMES: i64 = 3;

/// Reference string used when none is given.
pub const DEFAULT_TRACE: &str = "7, 0, 1, 2, 0, 3, 4, 2, 3, 0, 3, 2";

/// Policies run by default, in reporting order.
pub const DEFAULT_POLICIES: [PolicyKind; 3] =
    [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

/// A validated simulation setup: frame capacity plus the ordered list of
/// policies to run.
///
/// Validation happens once here, so a [`Simulator`](crate::Simulator) built
/// from a config cannot fail halfway through.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::new(3, vec![PolicyKind::Lru]).unwrap();
/// assert_eq!(config.capacity().get(), 3);
///
/// assert!(SimulationConfig::new(-1, vec![PolicyKind::Lru]).is_err());
/// assert!(SimulationConfig::new(3, vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    capacity: FrameCapacity,
    policies: Vec<PolicyKind>,
}

impl SimulationConfig {
    /// Validate a capacity and policy list.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is negative
    /// - `Error::CapacityOverflow` if `capacity` does not fit in a `usize`
    /// - `Error::EmptyPolicySet` if `policies` is empty
    pub fn new(capacity: i64, policies: Vec<PolicyKind>) -> Result<Self> {
        let capacity = FrameCapacity::new(capacity)?;
        if policies.is_empty() {
            return Err(Error::EmptyPolicySet);
        }
        Ok(Self { capacity, policies })
    }

    /// All three policies in the default order.
    pub fn with_default_policies(capacity: i64) -> Result<Self> {
        Self::new(capacity, DEFAULT_POLICIES.to_vec())
    }

    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    pub fn policies(&self) -> &[PolicyKind] {
        &self.policies
    }
}
