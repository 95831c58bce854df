//! Fixed-width rendering of variant statistics reports.

use super::registry::StatsStreamRegistry;
use super::{ReportError, Result};
use crate::variant::{
    GlobalStats, GroupStats, SampleGroupStats, SampleStats, SingleSampleStats, VariantStats,
};
use std::io::Write;

/// Renders aggregate statistics into the registry's destinations.
///
/// The expected call sequence is `open`, `setup`, any number of write
/// calls, `teardown`, `close`. Write calls against a closed writer
/// fail with [`ReportError::NotOpen`].
pub struct StatsReportWriter {
    registry: StatsStreamRegistry,
}

impl StatsReportWriter {
    /// Open all fixed destinations under the given output directory.
    pub fn open<P: AsRef<std::path::Path>>(root: P) -> Result<Self> {
        Ok(Self {
            registry: StatsStreamRegistry::open(root)?,
        })
    }

    /// The underlying destination registry.
    pub fn registry(&self) -> &StatsStreamRegistry {
        &self.registry
    }

    /// Emit the variant report column header. Runs once, before any
    /// per-variant writes.
    pub fn setup(&mut self) -> Result<()> {
        write_variant_header(self.registry.variants()?)
    }

    /// Post-write hook. Nothing to do for file-backed reports.
    pub fn teardown(&mut self) -> Result<()> {
        if !self.registry.is_open() {
            return Err(ReportError::NotOpen);
        }
        Ok(())
    }

    /// Append one fixed-width line per record to the variant report.
    pub fn write_variant_stats(&mut self, records: &[VariantStats]) -> Result<()> {
        let destination = self.registry.variants()?;
        for record in records {
            write_variant_line(destination, record)?;
        }
        Ok(())
    }

    /// Append the labeled global summary lines to the global report.
    ///
    /// Ratio lines are plain float divisions; a zero denominator
    /// renders as `inf` or `NaN` rather than failing.
    pub fn write_global_stats(&mut self, stats: &GlobalStats) -> Result<()> {
        let destination = self.registry.global()?;
        writeln!(destination, "Number of variants = {}", stats.variants_count)?;
        writeln!(destination, "Number of samples = {}", stats.samples_count)?;
        writeln!(
            destination,
            "Number of biallelic variants = {}",
            stats.biallelics_count
        )?;
        writeln!(
            destination,
            "Number of multiallelic variants = {}",
            stats.multiallelics_count
        )?;
        writeln!(destination, "Number of SNP = {}", stats.snps_count)?;
        writeln!(destination, "Number of indels = {}", stats.indels_count)?;
        writeln!(
            destination,
            "Number of transitions = {}",
            stats.transitions_count
        )?;
        writeln!(
            destination,
            "Number of transversions = {}",
            stats.transversions_count
        )?;
        writeln!(destination, "Ti/TV ratio = {:?}", stats.ti_tv_ratio())?;
        writeln!(
            destination,
            "Percentage of PASS = {:?}%",
            stats.pass_percentage()
        )?;
        writeln!(destination, "Average quality = {:?}", stats.mean_quality())?;
        Ok(())
    }

    /// Append a header plus one line per sample to the sample report.
    /// The header is written on every call, not once globally.
    pub fn write_sample_stats(&mut self, stats: &SampleStats) -> Result<()> {
        let destination = self.registry.sample()?;
        write_sample_header(destination)?;
        for sample in &stats.samples {
            write_sample_line(destination, sample)?;
        }
        Ok(())
    }

    /// Append grouped variant records to the group's per-sub-key
    /// destinations, creating and header-seeding them on the group's
    /// first write. Destinations are cached and reused on every later
    /// call for the same group, until [`close`](Self::close).
    ///
    /// An absent aggregate reports failure without further detail.
    pub fn write_group_stats(&mut self, stats: Option<&GroupStats>) -> Result<()> {
        let stats = stats.ok_or(ReportError::MissingInput)?;

        if !self.registry.has_group(&stats.group) {
            self.registry.create_group(&stats.group, stats.sub_keys())?;
            if let Some(destinations) = self.registry.group_destinations_mut(&stats.group) {
                for (_, destination) in destinations.iter_mut() {
                    write_variant_header(destination)?;
                }
            }
        }

        if let Some(destinations) = self.registry.group_destinations_mut(&stats.group) {
            for (sub_key, destination) in destinations.iter_mut() {
                if let Some(records) = stats.records(sub_key) {
                    for record in records {
                        write_variant_line(destination, record)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Write one fresh report file per sample key under the group,
    /// closed again before returning. These files are not cached:
    /// a second call for the same `(group, sample key)` pair
    /// overwrites the first file entirely.
    pub fn write_sample_group_stats(&mut self, stats: &SampleGroupStats) -> Result<()> {
        for (sample_key, sample_stats) in stats.entries() {
            let mut destination = self.registry.open_sample_group(&stats.group, sample_key)?;
            write_sample_header(&mut destination)?;
            for sample in &sample_stats.samples {
                write_sample_line(&mut destination, sample)?;
            }
            destination.flush()?;
        }
        Ok(())
    }

    /// Flush and release every destination the registry owns,
    /// including per-group destinations created mid-stream.
    pub fn close(&mut self) -> Result<()> {
        self.registry.close()
    }
}

/// Render a list as `[a, b, c]` for the Alt and allele-count columns.
fn bracket_list<T: ToString>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", joined.join(", "))
}

fn write_variant_header<W: Write>(destination: &mut W) -> Result<()> {
    writeln!(
        destination,
        "{:<5}{:<10}{:<10}{:<5}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<15}{:<40}{:<10}{:<10}{:<15}{:<10}{:<10}{:<10}{:<10}",
        "Chr",
        "Pos",
        "Indel?",
        "Ref",
        "Alt",
        "Maf",
        "Mgf",
        "NumAll.",
        "Miss All.",
        "Miss Gt",
        "All. Count",
        "Gt count",
        "Trans",
        "Transv",
        "Mend Error",
        "Cases D",
        "Controls D",
        "Cases R",
        "Controls R",
    )?;
    Ok(())
}

fn write_variant_line<W: Write>(destination: &mut W, v: &VariantStats) -> Result<()> {
    writeln!(
        destination,
        "{:<5}{:<10}{:<10}{:<5}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<15}{:<40}{:<10}{:<10}{:<15}{:<10.2}{:<10.2}{:<10.2}{:<10.2}",
        v.chromosome,
        v.position,
        if v.indel { "Y" } else { "N" },
        v.ref_allele,
        bracket_list(&v.alt_alleles),
        v.maf_allele,
        v.mgf_genotype,
        v.num_alleles,
        v.missing_alleles,
        v.missing_genotypes,
        bracket_list(&v.allele_counts),
        v.genotype_counts,
        v.transitions_count,
        v.transversions_count,
        v.mendelian_errors,
        v.cases_percent_dominant,
        v.controls_percent_dominant,
        v.cases_percent_recessive,
        v.controls_percent_recessive,
    )?;
    Ok(())
}

fn write_sample_header<W: Write>(destination: &mut W) -> Result<()> {
    writeln!(
        destination,
        "{:<10}{:<10}{:<10}{:<10}",
        "Sample", "MissGt", "Mendel Err", "Homoz Count"
    )?;
    Ok(())
}

// Last column is right-justified, matching the historical report layout.
fn write_sample_line<W: Write>(destination: &mut W, s: &SingleSampleStats) -> Result<()> {
    writeln!(
        destination,
        "{:<10}{:<10}{:<10}{:>10}",
        s.id, s.missing_genotypes, s.mendelian_errors, s.homozygotes_count
    )?;
    Ok(())
}
