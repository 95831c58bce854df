//! Variant records and the aggregate statistics shapes consumed by the
//! report writer.
//!
//! Statistics are computed upstream; the types here only carry finished
//! values into the report layer.

/// A variant call record, reduced to the fields the region filter
/// needs: chromosome name and 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantRecord {
    pub chromosome: String,
    pub position: u64,
}

impl VariantRecord {
    /// Create a new variant record.
    #[inline]
    pub fn new(chromosome: impl Into<String>, position: u64) -> Self {
        Self {
            chromosome: chromosome.into(),
            position,
        }
    }
}

/// Per-variant aggregate statistics, one instance per variant line in
/// the variant report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantStats {
    pub chromosome: String,
    pub position: u64,
    pub indel: bool,
    pub ref_allele: String,
    pub alt_alleles: Vec<String>,
    pub maf_allele: String,
    pub mgf_genotype: String,
    pub num_alleles: u32,
    pub missing_alleles: u32,
    pub missing_genotypes: u32,
    pub allele_counts: Vec<u32>,
    pub genotype_counts: String,
    pub transitions_count: u32,
    pub transversions_count: u32,
    pub mendelian_errors: u32,
    pub cases_percent_dominant: f64,
    pub controls_percent_dominant: f64,
    pub cases_percent_recessive: f64,
    pub controls_percent_recessive: f64,
}

/// Dataset-wide aggregate statistics for the global report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlobalStats {
    pub variants_count: u32,
    pub samples_count: u32,
    pub biallelics_count: u32,
    pub multiallelics_count: u32,
    pub snps_count: u32,
    pub indels_count: u32,
    pub transitions_count: u32,
    pub transversions_count: u32,
    pub pass_count: u32,
    pub accum_quality: f64,
}

impl GlobalStats {
    /// Transition/transversion ratio. Division by zero yields a
    /// non-finite value rather than an error.
    #[inline]
    pub fn ti_tv_ratio(&self) -> f32 {
        self.transitions_count as f32 / self.transversions_count as f32
    }

    /// Percentage of variants with a PASS filter status.
    #[inline]
    pub fn pass_percentage(&self) -> f32 {
        (self.pass_count as f32 / self.variants_count as f32) * 100.0
    }

    /// Mean quality over all variants.
    #[inline]
    pub fn mean_quality(&self) -> f32 {
        self.accum_quality as f32 / self.variants_count as f32
    }
}

/// Aggregate statistics for one sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSampleStats {
    pub id: String,
    pub missing_genotypes: u32,
    pub mendelian_errors: u32,
    pub homozygotes_count: u32,
}

impl SingleSampleStats {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Per-sample statistics for the whole dataset, in sample order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleStats {
    pub samples: Vec<SingleSampleStats>,
}

impl SampleStats {
    pub fn new(samples: Vec<SingleSampleStats>) -> Self {
        Self { samples }
    }
}

/// Per-variant statistics partitioned under one group, keyed by the
/// group's sub-keys (e.g. cohort values). Sub-key order is the order
/// sub-keys were added and is preserved in the report files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupStats {
    pub group: String,
    variants: Vec<(String, Vec<VariantStats>)>,
}

impl GroupStats {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            variants: Vec::new(),
        }
    }

    /// Append records under a sub-key, creating it on first use.
    pub fn push(&mut self, sub_key: impl Into<String>, records: Vec<VariantStats>) {
        let sub_key = sub_key.into();
        match self.variants.iter_mut().find(|(k, _)| *k == sub_key) {
            Some((_, existing)) => existing.extend(records),
            None => self.variants.push((sub_key, records)),
        }
    }

    /// Sub-keys in insertion order.
    pub fn sub_keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|(k, _)| k.as_str())
    }

    /// Records for one sub-key.
    pub fn records(&self, sub_key: &str) -> Option<&[VariantStats]> {
        self.variants
            .iter()
            .find(|(k, _)| k == sub_key)
            .map(|(_, v)| v.as_slice())
    }
}

/// Per-sample statistics partitioned under one group, keyed by the
/// group's sample keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleGroupStats {
    pub group: String,
    samples: Vec<(String, SampleStats)>,
}

impl SampleGroupStats {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            samples: Vec::new(),
        }
    }

    /// Set the per-sample stats for a sample key, replacing any
    /// previous value for that key.
    pub fn insert(&mut self, sample_key: impl Into<String>, stats: SampleStats) {
        let sample_key = sample_key.into();
        match self.samples.iter_mut().find(|(k, _)| *k == sample_key) {
            Some((_, existing)) => *existing = stats,
            None => self.samples.push((sample_key, stats)),
        }
    }

    /// Sample keys with their stats, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &SampleStats)> {
        self.samples.iter().map(|(k, v)| (k.as_str(), v))
    }
}
