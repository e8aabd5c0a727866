//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::{FrameCapacity, PageId};
use crate::policy::{FrameSet, PolicyKind};

/// Evicts the resident page whose last use is oldest.
///
/// Recency is the trace index of the last admission or hit. Indices are
/// unique, so two resident pages never share one; the victim scan still
/// breaks ties by lowest page id so the choice never depends on hash order.
pub struct LruFrameSet {
    /// Resident page -> trace index of its last use.
    last_used: HashMap<PageId, usize>,

    capacity: usize,
}

impl LruFrameSet {
    /// Create an empty LRU frame set.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            last_used: HashMap::with_capacity(capacity.get()),
            capacity: capacity.get(),
        }
    }

    /// Trace index at which `page` was last used, if resident.
    pub fn last_used(&self, page: PageId) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl FrameSet for LruFrameSet {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.last_used.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.last_used.contains_key(&page)
    }

    fn touch(&mut self, page: PageId, index: usize) {
        if let Some(last) = self.last_used.get_mut(&page) {
            *last = index;
        }
    }

    fn admit(&mut self, page: PageId, index: usize) {
        self.last_used.insert(page, index);
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self
            .last_used
            .iter()
            .min_by_key(|&(&page, &last)| (last, page))
            .map(|(&page, _)| page)?;
        self.last_used.remove(&victim);
        Some(victim)
    }

    /// Least recently used first.
    fn resident(&self) -> Vec<PageId> {
        let mut pages: Vec<(usize, PageId)> = self
            .last_used
            .iter()
            .map(|(&page, &last)| (last, page))
            .collect();
        pages.sort_unstable();
        pages.into_iter().map(|(_, page)| page).collect()
    }
}
