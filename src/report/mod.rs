//! Statistics report output for variant datasets.
//!
//! This module renders already-computed aggregates into fixed-width
//! text tables across a growing set of destinations:
//! - Three fixed reports (variants, global, sample), opened at startup
//! - Per-group variant reports, created lazily on first write and
//!   cached until close
//! - Per-sample-group reports, opened fresh and closed on every write
//!
//! All destinations owned by the registry are closed exactly once.

pub mod registry;
pub mod writer;

pub use registry::StatsStreamRegistry;
pub use writer::StatsReportWriter;

use std::io;
use thiserror::Error;

/// Errors that can occur while writing statistics reports.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Report destinations are not open")]
    NotOpen,

    #[error("Missing grouped statistics input")]
    MissingInput,
}

pub type Result<T> = std::result::Result<T, ReportError>;
