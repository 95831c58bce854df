//! Variant filter stages.
//!
//! Filters are composed into a pipeline by an external driver; each
//! stage is a predicate over one variant record plus a priority used
//! only for cross-stage ordering.

use crate::index::RegionIndex;
use crate::roi::Result;
use crate::variant::VariantRecord;
use rayon::prelude::*;
use std::path::Path;

/// Minimum number of records before enabling parallelization.
/// Below this threshold, sequential filtering is faster due to
/// thread spawn overhead.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// A single stage in a variant filter pipeline.
///
/// Implementations must be side-effect-free: `apply` may be called any
/// number of times, in any order, from multiple threads.
pub trait VariantFilter: Sync {
    /// Decide whether a record passes this filter.
    fn apply(&self, record: &VariantRecord) -> bool;

    /// Ordering hint for an external pipeline. Lower runs earlier.
    fn priority(&self) -> i32 {
        0
    }
}

/// A filter that keeps only variants whose position falls inside a
/// configured region of interest.
pub struct RegionFilter {
    index: RegionIndex,
    priority: i32,
}

impl RegionFilter {
    /// Build a filter from a region file with default priority.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(RegionIndex::from_path(path)?))
    }

    /// Build a filter from a region file with an explicit priority.
    pub fn from_path_with_priority<P: AsRef<Path>>(path: P, priority: i32) -> Result<Self> {
        Ok(Self::with_priority(RegionIndex::from_path(path)?, priority))
    }

    /// Wrap an already-built index with default priority.
    pub fn new(index: RegionIndex) -> Self {
        Self::with_priority(index, 0)
    }

    /// Wrap an already-built index with an explicit priority.
    pub fn with_priority(index: RegionIndex, priority: i32) -> Self {
        Self { index, priority }
    }

    /// The underlying region index.
    pub fn index(&self) -> &RegionIndex {
        &self.index
    }
}

impl VariantFilter for RegionFilter {
    fn apply(&self, record: &VariantRecord) -> bool {
        self.index.contains(&record.chromosome, record.position)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Retain the records that pass a filter, in input order.
pub fn filter_records<F: VariantFilter>(
    filter: &F,
    records: Vec<VariantRecord>,
) -> Vec<VariantRecord> {
    records.into_iter().filter(|r| filter.apply(r)).collect()
}

/// Parallel variant of [`filter_records`]. Falls back to sequential
/// filtering for small inputs.
pub fn filter_records_parallel<F: VariantFilter>(
    filter: &F,
    records: Vec<VariantRecord>,
) -> Vec<VariantRecord> {
    if records.len() < PARALLEL_THRESHOLD {
        return filter_records(filter, records);
    }

    records
        .into_par_iter()
        .filter(|r| filter.apply(r))
        .collect()
}
