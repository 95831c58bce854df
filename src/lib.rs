//! varif: region filtering and statistics reporting for variant call
//! datasets.
//!
//! This library provides two independent pieces:
//!
//! - **Region filtering**: build a [`RegionIndex`] once from a
//!   region-of-interest file, then answer point-containment queries for
//!   a stream of variant records through a [`RegionFilter`].
//! - **Statistics reporting**: fan already-computed per-variant,
//!   global, per-sample, and per-group aggregates out to fixed-width
//!   report files through a [`StatsReportWriter`].
//!
//! # Example
//!
//! ```rust,no_run
//! use varif::{RegionFilter, VariantFilter, VariantRecord};
//!
//! let filter = RegionFilter::from_path("targets.tsv").unwrap();
//! let keep = filter.apply(&VariantRecord::new("chr1", 150));
//! println!("inside region: {}", keep);
//! ```

pub mod filter;
pub mod index;
pub mod region;
pub mod report;
pub mod roi;
pub mod variant;

// Re-export commonly used types
pub use filter::{filter_records, filter_records_parallel, RegionFilter, VariantFilter};
pub use index::RegionIndex;
pub use region::Region;
pub use report::{StatsReportWriter, StatsStreamRegistry};
pub use variant::{
    GlobalStats, GroupStats, SampleGroupStats, SampleStats, SingleSampleStats, VariantRecord,
    VariantStats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::filter::{RegionFilter, VariantFilter};
    pub use crate::index::RegionIndex;
    pub use crate::region::Region;
    pub use crate::report::{StatsReportWriter, StatsStreamRegistry};
    pub use crate::roi::{parse_regions, read_regions, RoiReader};
    pub use crate::variant::{
        GlobalStats, GroupStats, SampleGroupStats, SampleStats, SingleSampleStats, VariantRecord,
        VariantStats,
    };
}
