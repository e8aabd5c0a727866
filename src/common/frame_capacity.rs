//! Frame capacity type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Number of physical frames available to a simulation.
///
/// Built from a signed integer because that is what input adapters hand
/// over; negative values are rejected here so the simulation itself never
/// has to deal with them. Zero is allowed: every reference faults and
/// nothing is ever admitted.
///
/// # Example
/// ```
/// use pagesim::FrameCapacity;
///
/// let capacity = FrameCapacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(FrameCapacity::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameCapacity(usize);

impl FrameCapacity {
    /// Validate and wrap a frame count.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `frames` is negative
    /// - `Error::CapacityOverflow` if `frames` does not fit in a `usize`
    pub fn new(frames: i64) -> Result<Self> {
        if frames < 0 {
            return Err(Error::InvalidConfiguration { capacity: frames });
        }
        usize::try_from(frames)
            .map(FrameCapacity)
            .map_err(|_| Error::CapacityOverflow { capacity: frames })
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// True for the degenerate zero-frame configuration.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for FrameCapacity {
    fn from(frames: usize) -> Self {
        FrameCapacity(frames)
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}
