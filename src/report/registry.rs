//! Destination registry for statistics reports.
//!
//! Owns every open report sink: the three fixed reports, plus the
//! lazily-created per-group destinations, all released together by
//! [`StatsStreamRegistry::close`]. Per-sample-group sinks are the one
//! exception: they are handed out one-shot and never cached (see
//! [`StatsStreamRegistry::open_sample_group`]).

use super::{ReportError, Result};
use rustc_hash::FxHashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An open, append-capable text sink bound to one report file.
pub type Destination = BufWriter<File>;

/// The three always-present reports.
struct FixedDestinations {
    variants: Destination,
    global: Destination,
    sample: Destination,
}

/// Registry of open report destinations under one output directory.
///
/// Lifecycle is `open -> writes -> close`; every write accessor fails
/// with [`ReportError::NotOpen`] once the registry has been closed.
pub struct StatsStreamRegistry {
    group_dir: PathBuf,
    sample_group_dir: PathBuf,
    fixed: Option<FixedDestinations>,
    /// group -> sub-key -> destination, sub-keys in creation order
    groups: FxHashMap<String, Vec<(String, Destination)>>,
}

impl StatsStreamRegistry {
    /// Open the three fixed destinations (`variants.stats`,
    /// `global.stats`, `sample.stats`) and create the directories
    /// backing per-group and per-sample-group output.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let group_dir = root.join("groupStats");
        let sample_group_dir = root.join("sampleGroupStats");
        fs::create_dir_all(&group_dir)?;
        fs::create_dir_all(&sample_group_dir)?;

        let variants = BufWriter::new(File::create(root.join("variants.stats"))?);
        let global = BufWriter::new(File::create(root.join("global.stats"))?);
        let sample = BufWriter::new(File::create(root.join("sample.stats"))?);

        Ok(Self {
            group_dir,
            sample_group_dir,
            fixed: Some(FixedDestinations {
                variants,
                global,
                sample,
            }),
            groups: FxHashMap::default(),
        })
    }

    /// Whether the registry is still open for writes.
    pub fn is_open(&self) -> bool {
        self.fixed.is_some()
    }

    fn fixed_mut(&mut self) -> Result<&mut FixedDestinations> {
        self.fixed.as_mut().ok_or(ReportError::NotOpen)
    }

    /// The variant report destination.
    pub fn variants(&mut self) -> Result<&mut Destination> {
        Ok(&mut self.fixed_mut()?.variants)
    }

    /// The global report destination.
    pub fn global(&mut self) -> Result<&mut Destination> {
        Ok(&mut self.fixed_mut()?.global)
    }

    /// The sample report destination.
    pub fn sample(&mut self) -> Result<&mut Destination> {
        Ok(&mut self.fixed_mut()?.sample)
    }

    /// Whether destinations for a group have already been created.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Create one destination per sub-key for a group and cache them.
    /// Intended to run once per group, on first encounter; the cached
    /// destinations stay open until [`close`](Self::close).
    pub fn create_group<'a>(
        &mut self,
        group: &str,
        sub_keys: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        if !self.is_open() {
            return Err(ReportError::NotOpen);
        }

        let mut destinations = Vec::new();
        for sub_key in sub_keys {
            let path = self
                .group_dir
                .join(format!("variant_stats_{}_{}.stats", group, sub_key));
            destinations.push((sub_key.to_string(), BufWriter::new(File::create(path)?)));
        }
        self.groups.insert(group.to_string(), destinations);
        Ok(())
    }

    /// The cached destinations for a group, sub-keys in creation order.
    pub fn group_destinations_mut(&mut self, group: &str) -> Option<&mut [(String, Destination)]> {
        self.groups.get_mut(group).map(|v| v.as_mut_slice())
    }

    /// Open a fresh one-shot destination for a `(group, sample key)`
    /// pair. The caller writes and drops it; the registry keeps no
    /// reference, and a later call for the same pair truncates the
    /// previous file.
    pub fn open_sample_group(&self, group: &str, sample_key: &str) -> Result<Destination> {
        if !self.is_open() {
            return Err(ReportError::NotOpen);
        }

        let path = self.sample_group_dir.join(format!(
            "variant_stats_{}_{}.sample.stats",
            group, sample_key
        ));
        Ok(BufWriter::new(File::create(path)?))
    }

    /// Directory holding per-group report files.
    pub fn group_dir(&self) -> &Path {
        &self.group_dir
    }

    /// Directory holding per-sample-group report files.
    pub fn sample_group_dir(&self) -> &Path {
        &self.sample_group_dir
    }

    /// Flush and release every owned destination: the three fixed
    /// reports and all cached per-group destinations. Closing an
    /// already-closed registry is an error.
    pub fn close(&mut self) -> Result<()> {
        let mut fixed = self.fixed.take().ok_or(ReportError::NotOpen)?;
        fixed.variants.flush()?;
        fixed.global.flush()?;
        fixed.sample.flush()?;

        for (_, destinations) in self.groups.drain() {
            for (_, mut destination) in destinations {
                destination.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_fixed_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        let registry = StatsStreamRegistry::open(dir.path()).unwrap();

        assert!(dir.path().join("variants.stats").is_file());
        assert!(dir.path().join("global.stats").is_file());
        assert!(dir.path().join("sample.stats").is_file());
        assert!(registry.group_dir().is_dir());
        assert!(registry.sample_group_dir().is_dir());
    }

    #[test]
    fn test_open_creates_missing_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("out");
        let registry = StatsStreamRegistry::open(&root).unwrap();

        assert!(root.join("variants.stats").is_file());
        assert!(registry.is_open());
    }

    #[test]
    fn test_write_after_close_fails() {
        let dir = TempDir::new().unwrap();
        let mut registry = StatsStreamRegistry::open(dir.path()).unwrap();
        registry.close().unwrap();

        assert!(!registry.is_open());
        assert!(matches!(registry.variants(), Err(ReportError::NotOpen)));
        assert!(matches!(
            registry.open_sample_group("g", "s"),
            Err(ReportError::NotOpen)
        ));
    }

    #[test]
    fn test_double_close_fails() {
        let dir = TempDir::new().unwrap();
        let mut registry = StatsStreamRegistry::open(dir.path()).unwrap();
        registry.close().unwrap();

        assert!(matches!(registry.close(), Err(ReportError::NotOpen)));
    }

    #[test]
    fn test_group_destinations_cached() {
        let dir = TempDir::new().unwrap();
        let mut registry = StatsStreamRegistry::open(dir.path()).unwrap();

        assert!(!registry.has_group("phenotype"));
        registry
            .create_group("phenotype", ["cases", "controls"])
            .unwrap();
        assert!(registry.has_group("phenotype"));

        let destinations = registry.group_destinations_mut("phenotype").unwrap();
        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].0, "cases");
        assert!(registry
            .group_dir()
            .join("variant_stats_phenotype_cases.stats")
            .is_file());

        registry.close().unwrap();
    }

    #[test]
    fn test_sample_group_destination_not_cached() {
        let dir = TempDir::new().unwrap();
        let mut registry = StatsStreamRegistry::open(dir.path()).unwrap();

        {
            let mut destination = registry.open_sample_group("cohort", "NA001").unwrap();
            destination.write_all(b"first\n").unwrap();
            destination.flush().unwrap();
        }
        {
            let mut destination = registry.open_sample_group("cohort", "NA001").unwrap();
            destination.write_all(b"second\n").unwrap();
            destination.flush().unwrap();
        }

        let path = registry
            .sample_group_dir()
            .join("variant_stats_cohort_NA001.sample.stats");
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "second\n");

        registry.close().unwrap();
    }
}
