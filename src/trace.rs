//! Page reference traces.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::common::{PageId, Result};

/// An ordered, immutable sequence of page references.
///
/// Cloning is cheap (the pages live behind an `Arc`), so one trace can be
/// handed to several policy simulations, including ones on other threads.
///
/// # Example
/// ```
/// use pagesim::{PageId, Trace};
///
/// let trace = Trace::parse("1, 2 3,1").unwrap();
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace.get(3), Some(PageId::new(1)));
/// assert_eq!(trace.distinct_pages(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pages: Arc<[PageId]>,
}

impl Trace {
    /// Create a trace from page identifiers.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self {
            pages: pages.into(),
        }
    }

    /// Parse a reference string.
    ///
    /// Tokens may be separated by commas, whitespace, or both. Empty input
    /// yields an empty trace.
    ///
    /// # Errors
    /// - `Error::InvalidPageReference` if a token is not a non-negative integer
    pub fn parse(input: &str) -> Result<Self> {
        let pages = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<PageId>>>()?;
        Ok(Self::new(pages))
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page referenced at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).copied()
    }

    /// All references in order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }

    /// For every position `i`, the next position `j > i` referencing the same
    /// page, or `None` if the page is never referenced again.
    ///
    /// Built in one backward pass; this is the lookahead table the Optimal
    /// policy reads instead of rescanning the trace suffix on each fault.
    pub fn next_occurrences(&self) -> Vec<Option<usize>> {
        let mut next = vec![None; self.pages.len()];
        let mut seen: HashMap<PageId, usize> = HashMap::new();

        for (index, &page) in self.pages.iter().enumerate().rev() {
            next[index] = seen.insert(page, index);
        }
        next
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<PageId>> for Trace {
    fn from(pages: Vec<PageId>) -> Self {
        Self::new(pages)
    }
}

impl From<&[u32]> for Trace {
    fn from(ids: &[u32]) -> Self {
        ids.iter().copied().map(PageId::new).collect()
    }
}

impl FromIterator<PageId> for Trace {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
