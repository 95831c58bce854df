//! Streaming reader for region-of-interest files.
//!
//! A region file is newline-delimited text; every non-empty line holds
//! three tab-separated fields: `chrom<TAB>start<TAB>end`, with integer
//! start and end. There is no header line and no comment convention.

use crate::region::Region;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a region file.
#[derive(Error, Debug)]
pub enum RoiError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, RoiError>;

/// A streaming region file reader.
pub struct RoiReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl RoiReader<File> {
    /// Open a region file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> RoiReader<R> {
    /// Create a new region reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(256),
        }
    }

    /// Read the next region, skipping empty lines.
    /// Returns the chromosome name together with the region.
    pub fn read_region(&mut self) -> Result<Option<(String, Region)>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }

            return self.parse_line(line).map(Some);
        }
    }

    /// Parse a single `chrom\tstart\tend` line.
    fn parse_line(&self, line: &str) -> Result<(String, Region)> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() != 3 {
            return Err(RoiError::Parse {
                line: self.line_number,
                message: format!("Expected 3 fields, got {}", fields.len()),
            });
        }

        let chrom = fields[0].to_string();
        let start = self.parse_position(fields[1], "start")?;
        let end = self.parse_position(fields[2], "end")?;

        Ok((chrom, Region::new(start, end)))
    }

    fn parse_position(&self, s: &str, field_name: &str) -> Result<u64> {
        s.parse().map_err(|_| RoiError::Parse {
            line: self.line_number,
            message: format!("Invalid {} position: '{}'", field_name, s),
        })
    }

    /// Get an iterator over all regions.
    pub fn regions(self) -> RoiRegionIter<R> {
        RoiRegionIter { reader: self }
    }
}

/// Iterator over the regions of a region file.
pub struct RoiRegionIter<R: Read> {
    reader: RoiReader<R>,
}

impl<R: Read> Iterator for RoiRegionIter<R> {
    type Item = Result<(String, Region)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_region() {
            Ok(Some(region)) => Some(Ok(region)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read all regions from a file.
pub fn read_regions<P: AsRef<Path>>(path: P) -> Result<Vec<(String, Region)>> {
    let reader = RoiReader::from_path(path)?;
    reader.regions().collect()
}

/// Parse regions from a string (useful for testing).
pub fn parse_regions(content: &str) -> Result<Vec<(String, Region)>> {
    let reader = RoiReader::new(content.as_bytes());
    reader.regions().collect()
}
