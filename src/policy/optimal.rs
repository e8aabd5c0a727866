//! Optimal (Belady) replacement policy.
//!
//! Evicts the resident page whose next reference lies farthest in the
//! future. Pages that are never referenced again are the first candidates;
//! among those the lowest page id goes.
//!
//! Instead of scanning the remaining trace on every fault, the frame set
//! reads a next-occurrence table built once from the trace. When a page is
//! referenced at index `i` its next use is `next[i]`; no other reference to
//! that page can happen before the page is referenced again, so the stored
//! value stays exact until the next touch.

use std::collections::HashMap;

use crate::common::{FrameCapacity, PageId};
use crate::policy::{FrameSet, PolicyKind};
use crate::trace::Trace;

/// Frame set driven by perfect knowledge of the future.
pub struct OptimalFrameSet {
    /// Resident page -> index of its next reference (`None` = never again).
    next_use: HashMap<PageId, Option<usize>>,

    /// `next[i]` is the next index referencing the page at `i`.
    next: Vec<Option<usize>>,

    /// The trace `next` was built from.
    trace: Trace,

    capacity: usize,
}

impl OptimalFrameSet {
    /// Create an empty frame set for `trace`.
    ///
    /// Only valid for simulating that same trace: every `admit`/`touch` must
    /// name the page the trace holds at `index`.
    pub fn new(capacity: FrameCapacity, trace: &Trace) -> Self {
        Self {
            next_use: HashMap::with_capacity(capacity.get()),
            next: trace.next_occurrences(),
            trace: trace.clone(),
            capacity: capacity.get(),
        }
    }

    fn record_use(&mut self, page: PageId, index: usize) {
        debug_assert_eq!(
            self.trace.get(index),
            Some(page),
            "Optimal frame set driven with a different trace than it was built for"
        );
        let next = self.next.get(index).copied().flatten();
        self.next_use.insert(page, next);
    }
}

/// Distance key: never-used-again sorts above every real index.
fn distance(next: Option<usize>) -> usize {
    next.unwrap_or(usize::MAX)
}

impl FrameSet for OptimalFrameSet {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.next_use.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.next_use.contains_key(&page)
    }

    fn touch(&mut self, page: PageId, index: usize) {
        if self.next_use.contains_key(&page) {
            self.record_use(page, index);
        }
    }

    fn admit(&mut self, page: PageId, index: usize) {
        self.record_use(page, index);
    }

    fn evict(&mut self) -> Option<PageId> {
        let victim = self
            .next_use
            .iter()
            .max_by(|&(a_page, &a_next), &(b_page, &b_next)| {
                distance(a_next)
                    .cmp(&distance(b_next))
                    .then_with(|| b_page.cmp(a_page))
            })
            .map(|(&page, _)| page)?;
        self.next_use.remove(&victim);
        Some(victim)
    }

    /// Ascending page id.
    fn resident(&self) -> Vec<PageId> {
        let mut pages: Vec<PageId> = self.next_use.keys().copied().collect();
        pages.sort_unstable();
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Suffix scan: smallest j > i with trace[j] == page.
    fn scan_next_use(trace: &Trace, i: usize, page: PageId) -> Option<usize> {
        trace.pages()[i + 1..]
            .iter()
            .position(|&p| p == page)
            .map(|offset| i + 1 + offset)
    }

    fn frames_for(ids: &[u32], capacity: usize) -> (Trace, OptimalFrameSet) {
        let trace = Trace::from(ids);
        let frames = OptimalFrameSet::new(FrameCapacity::from(capacity), &trace);
        (trace, frames)
    }

    #[test]
    fn test_optimal_evicts_farthest_next_use() {
        // 1 is next used at 4, 2 at 5, 3 at 6.
        let (_, mut frames) = frames_for(&[1, 2, 3, 4, 1, 2, 3], 3);
        frames.admit(PageId::new(1), 0);
        frames.admit(PageId::new(2), 1);
        frames.admit(PageId::new(3), 2);

        assert_eq!(frames.evict(), Some(PageId::new(3)));
    }

    #[test]
    fn test_optimal_prefers_never_used_again() {
        let (_, mut frames) = frames_for(&[1, 2, 3, 4, 1], 3);
        frames.admit(PageId::new(1), 0);
        frames.admit(PageId::new(2), 1);
        frames.admit(PageId::new(3), 2);

        // 2 and 3 are never used again; lowest id wins the tie.
        assert_eq!(frames.evict(), Some(PageId::new(2)));
        assert_eq!(frames.evict(), Some(PageId::new(3)));
        assert_eq!(frames.evict(), Some(PageId::new(1)));
        assert_eq!(frames.evict(), None);
    }

    #[test]
    fn test_optimal_touch_moves_next_use_forward() {
        // Page 1 is used at 0, 2 and 5; page 2 at 1 and 4.
        let (_, mut frames) = frames_for(&[1, 2, 1, 3, 2, 1], 2);
        frames.admit(PageId::new(1), 0);
        frames.admit(PageId::new(2), 1);
        frames.touch(PageId::new(1), 2);

        // At index 3: page 1 next at 5, page 2 next at 4.
        assert_eq!(frames.evict(), Some(PageId::new(1)));
    }

    #[test]
    fn test_table_matches_suffix_scan() {
        let trace = Trace::from(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9][..]);
        let next = trace.next_occurrences();

        for (i, page) in trace.iter().enumerate() {
            assert_eq!(next[i], scan_next_use(&trace, i, page), "index {}", i);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "different trace")]
    fn test_mismatched_trace_detected() {
        let built_for = Trace::from(&[1, 2, 3, 1][..]);
        let other = Trace::from(&[4, 5, 6, 4][..]);
        let mut frames = OptimalFrameSet::new(FrameCapacity::from(2), &built_for);

        crate::simulation::drive(&other, &mut frames);
    }

    #[test]
    fn test_resident_sorted() {
        let (_, mut frames) = frames_for(&[9, 2, 5], 3);
        frames.admit(PageId::new(9), 0);
        frames.admit(PageId::new(2), 1);
        frames.admit(PageId::new(5), 2);
        assert_eq!(
            frames.resident(),
            vec![PageId::new(2), PageId::new(5), PageId::new(9)]
        );
    }
}
