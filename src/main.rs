//! varif command-line interface.
//!
//! Usage: varif <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use varif::filter::{RegionFilter, VariantFilter};
use varif::roi::RoiError;
use varif::variant::VariantRecord;

#[derive(Parser)]
#[command(name = "varif")]
#[command(author = "Manish Kumar Bobbili")]
#[command(version)]
#[command(about = "varif: region-of-interest filtering for variant call datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep variant lines that fall inside a region of interest
    Filter {
        /// Region file (tab-separated: chrom, start, end)
        #[arg(short, long)]
        regions: PathBuf,

        /// Variant file (tab-separated: chrom, pos, ...; stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Keep lines outside the regions instead
        #[arg(long)]
        invert: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Filter {
            regions,
            input,
            invert,
        } => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            run_filter(&regions, input.as_deref(), invert, &mut out)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_filter<W: Write>(
    regions: &std::path::Path,
    input: Option<&std::path::Path>,
    invert: bool,
    out: &mut W,
) -> Result<(), RoiError> {
    let filter = RegionFilter::from_path(regions)?;

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let record = parse_variant_line(&line, line_number + 1)?;
        if filter.apply(&record) != invert {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Parse `chrom<TAB>pos[<TAB>rest...]` into a variant record.
fn parse_variant_line(line: &str, line_number: usize) -> Result<VariantRecord, RoiError> {
    let mut fields = line.split('\t');
    let chromosome = fields.next().unwrap_or_default();
    let position = fields.next().ok_or_else(|| RoiError::Parse {
        line: line_number,
        message: "Expected at least 2 fields: chrom and pos".to_string(),
    })?;

    let position: u64 = position.parse().map_err(|_| RoiError::Parse {
        line: line_number,
        message: format!("Invalid variant position: '{}'", position),
    })?;

    Ok(VariantRecord::new(chromosome, position))
}
