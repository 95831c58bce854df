//! Core region type for genomic ranges of interest.

use std::cmp::Ordering;
use std::fmt;

/// A genomic range of interest on one chromosome.
/// Uses inclusive coordinates at both ends: a position `p` is inside
/// the region when `start <= p <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub start: u64,
    pub end: u64,
}

impl Region {
    /// Create a new region.
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Returns the number of positions covered by the region.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start) + 1
    }

    /// Inclusive intervals always cover at least one position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if a point position falls inside this region, inclusive
    /// at both boundaries.
    #[inline]
    pub fn contains(&self, pos: u64) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start.cmp(&other.start).then(self.end.cmp(&other.end))
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
