//! End-to-end tests for the statistics report writer lifecycle.

use std::fs;
use tempfile::TempDir;
use varif::report::StatsReportWriter;
use varif::variant::{
    GlobalStats, GroupStats, SampleGroupStats, SampleStats, SingleSampleStats, VariantStats,
};

fn variant(chromosome: &str, position: u64) -> VariantStats {
    VariantStats {
        chromosome: chromosome.to_string(),
        position,
        ref_allele: "A".to_string(),
        alt_alleles: vec!["G".to_string()],
        maf_allele: "G".to_string(),
        mgf_genotype: "0/1".to_string(),
        num_alleles: 2,
        allele_counts: vec![90, 10],
        genotype_counts: "0/0:40 0/1:10".to_string(),
        transitions_count: 1,
        ..Default::default()
    }
}

fn sample(id: &str) -> SingleSampleStats {
    SingleSampleStats {
        id: id.to_string(),
        missing_genotypes: 3,
        mendelian_errors: 1,
        homozygotes_count: 12,
    }
}

#[test]
fn test_full_report_lifecycle() {
    let dir = TempDir::new().unwrap();
    let mut writer = StatsReportWriter::open(dir.path()).unwrap();
    writer.setup().unwrap();

    writer
        .write_variant_stats(&[variant("chr1", 100), variant("chr1", 250)])
        .unwrap();

    writer
        .write_global_stats(&GlobalStats {
            variants_count: 2,
            samples_count: 3,
            biallelics_count: 2,
            snps_count: 2,
            transitions_count: 30,
            transversions_count: 10,
            pass_count: 1,
            accum_quality: 90.0,
            ..Default::default()
        })
        .unwrap();

    writer
        .write_sample_stats(&SampleStats::new(vec![sample("NA001"), sample("NA002")]))
        .unwrap();

    let mut group = GroupStats::new("phenotype");
    group.push("cases", vec![variant("chr1", 100)]);
    group.push("controls", vec![variant("chr1", 250)]);
    writer.write_group_stats(Some(&group)).unwrap();

    let mut sample_group = SampleGroupStats::new("phenotype");
    sample_group.insert("cases", SampleStats::new(vec![sample("NA001")]));
    writer.write_sample_group_stats(&sample_group).unwrap();

    writer.teardown().unwrap();
    writer.close().unwrap();

    let variants = fs::read_to_string(dir.path().join("variants.stats")).unwrap();
    assert_eq!(variants.lines().count(), 3);
    assert!(variants.lines().next().unwrap().starts_with("Chr"));

    let global = fs::read_to_string(dir.path().join("global.stats")).unwrap();
    assert!(global.contains("Number of variants = 2"));
    assert!(global.contains("Ti/TV ratio = 3.0"));
    assert!(global.contains("Percentage of PASS = 50.0%"));
    assert!(global.contains("Average quality = 45.0"));

    let samples = fs::read_to_string(dir.path().join("sample.stats")).unwrap();
    assert_eq!(samples.lines().count(), 3);
    assert!(samples.contains("NA002"));

    let cases = fs::read_to_string(
        dir.path()
            .join("groupStats/variant_stats_phenotype_cases.stats"),
    )
    .unwrap();
    assert_eq!(cases.lines().count(), 2);

    let sample_group_file = fs::read_to_string(
        dir.path()
            .join("sampleGroupStats/variant_stats_phenotype_cases.sample.stats"),
    )
    .unwrap();
    assert_eq!(sample_group_file.lines().count(), 2);
    assert!(sample_group_file.contains("NA001"));
}

#[test]
fn test_group_destinations_survive_across_writes_until_close() {
    let dir = TempDir::new().unwrap();
    let mut writer = StatsReportWriter::open(dir.path()).unwrap();

    let mut group = GroupStats::new("panel");
    group.push("exome", vec![variant("chr2", 10)]);

    writer.write_group_stats(Some(&group)).unwrap();
    let path = dir.path().join("groupStats/variant_stats_panel_exome.stats");

    writer.write_group_stats(Some(&group)).unwrap();
    writer.write_group_stats(Some(&group)).unwrap();
    writer.close().unwrap();

    // One header from the first write, then one record per write.
    let content = fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 4);
    assert_eq!(content.lines().filter(|l| l.starts_with("Chr")).count(), 1);
}

#[test]
fn test_distinct_groups_get_distinct_destinations() {
    let dir = TempDir::new().unwrap();
    let mut writer = StatsReportWriter::open(dir.path()).unwrap();

    let mut first = GroupStats::new("phenotype");
    first.push("cases", vec![variant("chr1", 100)]);
    let mut second = GroupStats::new("superpopulation");
    second.push("EUR", vec![variant("chr1", 100)]);

    writer.write_group_stats(Some(&first)).unwrap();
    writer.write_group_stats(Some(&second)).unwrap();
    writer.close().unwrap();

    assert!(dir
        .path()
        .join("groupStats/variant_stats_phenotype_cases.stats")
        .is_file());
    assert!(dir
        .path()
        .join("groupStats/variant_stats_superpopulation_EUR.stats")
        .is_file());
}

#[test]
fn test_sample_group_rewrite_overwrites() {
    let dir = TempDir::new().unwrap();
    let mut writer = StatsReportWriter::open(dir.path()).unwrap();

    let mut first = SampleGroupStats::new("cohort");
    first.insert(
        "batch1",
        SampleStats::new(vec![sample("NA001"), sample("NA002")]),
    );
    writer.write_sample_group_stats(&first).unwrap();

    let mut second = SampleGroupStats::new("cohort");
    second.insert("batch1", SampleStats::new(vec![sample("NA009")]));
    writer.write_sample_group_stats(&second).unwrap();
    writer.close().unwrap();

    let content = fs::read_to_string(
        dir.path()
            .join("sampleGroupStats/variant_stats_cohort_batch1.sample.stats"),
    )
    .unwrap();
    assert!(content.contains("NA009"));
    assert!(!content.contains("NA001"));
}

#[test]
fn test_unwritable_output_root_fails_open() {
    let dir = TempDir::new().unwrap();
    // A plain file where the output directory should go.
    let blocker = dir.path().join("out");
    fs::write(&blocker, b"").unwrap();

    assert!(StatsReportWriter::open(&blocker).is_err());
}
