//! Region membership index for point-containment queries.
//!
//! Built once from a region-of-interest file and read-only afterward:
//! the access pattern is "build once, then answer many point queries",
//! with no deletion, mutation, or range queries.

use crate::region::Region;
use crate::roi::{Result, RoiReader};
use rustc_hash::FxHashMap;
use std::io::Read;
use std::path::Path;

/// An index of regions organized by chromosome.
///
/// Regions within a chromosome are kept sorted by start position and
/// de-duplicated on start alone: a second region sharing a start with an
/// already-stored one is dropped, even when its end differs
/// (first-inserted wins). Chromosome order is preserved from input.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    regions_by_chrom: FxHashMap<String, Vec<Region>>,
    /// Chromosome order (preserves input file order)
    order: Vec<String>,
}

impl RegionIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            regions_by_chrom: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Load an index from a region file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(RoiReader::from_path(path)?)
    }

    /// Build an index from any region reader.
    pub fn from_reader<R: Read>(reader: RoiReader<R>) -> Result<Self> {
        let mut index = Self::new();
        for entry in reader.regions() {
            let (chrom, region) = entry?;
            index.insert(chrom, region);
        }
        Ok(index)
    }

    /// Insert a region, creating the chromosome's list on first use.
    /// Inserting a region whose start collides with a stored one is a
    /// no-op; the stored region survives.
    pub fn insert(&mut self, chrom: String, region: Region) {
        if !self.regions_by_chrom.contains_key(&chrom) {
            self.order.push(chrom.clone());
        }
        let regions = self.regions_by_chrom.entry(chrom).or_default();

        match regions.binary_search_by_key(&region.start, |r| r.start) {
            Ok(_) => {} // start already present, first-inserted wins
            Err(pos) => regions.insert(pos, region),
        }
    }

    /// Check whether a point position falls inside any stored region
    /// for the given chromosome, inclusive at both boundaries.
    pub fn contains(&self, chrom: &str, pos: u64) -> bool {
        if let Some(regions) = self.regions_by_chrom.get(chrom) {
            for region in regions {
                if region.start > pos {
                    break;
                }
                if region.contains(pos) {
                    return true;
                }
            }
        }
        false
    }

    /// Get all chromosomes in first-seen input order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Get the stored regions for a chromosome, sorted by start.
    pub fn regions(&self, chrom: &str) -> Option<&[Region]> {
        self.regions_by_chrom.get(chrom).map(|v| v.as_slice())
    }

    /// Get the total number of stored regions.
    pub fn len(&self) -> usize {
        self.regions_by_chrom.values().map(|v| v.len()).sum()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.regions_by_chrom.is_empty()
    }
}
