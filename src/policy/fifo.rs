//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::{FrameCapacity, PageId};
use crate::policy::{FrameSet, PolicyKind};

/// Evicts pages in the order they were admitted.
///
/// Hits do not reorder anything: a page loaded long ago is evicted next even
/// if it was just used.
pub struct FifoFrameSet {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    capacity: usize,
}

impl FifoFrameSet {
    /// Create an empty FIFO frame set.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity.get()),
            resident: HashSet::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }
}

impl FrameSet for FifoFrameSet {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    fn touch(&mut self, _page: PageId, _index: usize) {}

    fn admit(&mut self, page: PageId, _index: usize) {
        if self.resident.insert(page) {
            self.queue.push_back(page);
        }
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.resident.remove(&victim);
        Some(victim)
    }

    /// Oldest first.
    fn resident(&self) -> Vec<PageId> {
        self.queue.iter().copied().collect()
    }
}
