//! # Commands run in `main.rs`
//!
//! We set up the command line and the pipeline it drives in this file:
//! locate the amplicon in the BED file, select its reads from the BAM
//! file, trim them to the amplicon, and write them out.
use crate::{
    Error, InputAmplicon, SubstringMatch, bam_writer, bed_lookup, file_utils, read_selector,
    read_trimmer,
};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Main command line parsing struct
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[non_exhaustive]
pub struct Cli {
    /// Amplicon inputs
    #[clap(flatten)]
    pub amplicon: InputAmplicon,
    /// Output BAM file; defaults to `<amplicon_name>_extracted_reads.bam`
    /// in the current directory. If pre-existing, the file is overwritten.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// Log progress of each stage
    #[clap(short, long)]
    pub verbose: bool,
}

/// Output path used when none is given on the command line
#[must_use]
pub fn default_output_path(amplicon_name: &str) -> PathBuf {
    PathBuf::from(format!("{amplicon_name}_extracted_reads.bam"))
}

/// Runs the whole extraction and reports the output path on `handle`.
/// Each input file is closed before the next stage starts.
///
/// # Errors
/// Returns an error if an input path cannot be resolved, the amplicon or
/// its contig cannot be found, a BED line is malformed, a read needing
/// trimming has no qualities, no reads are selected, or on I/O failure.
pub fn run<W>(cli: Cli, mut handle: W) -> Result<(), Error>
where
    W: io::Write,
{
    let bam_path = file_utils::resolve_path(&cli.amplicon.bam_path)?;
    let bed_path = file_utils::resolve_path(&cli.amplicon.bed_path)?;

    let amplicon = bed_lookup::find_amplicon(
        file_utils::bed_records(&bed_path)?,
        &cli.amplicon.primer_query(),
        &SubstringMatch,
    )?;

    let reads = {
        let mut bam_reader = file_utils::indexed_bam_reader(&bam_path)?;
        read_selector::fetch_amplicon_reads(&mut bam_reader, &amplicon)?
    };

    let reads = read_trimmer::trim_reads(reads, &amplicon)?;

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.amplicon.amplicon_name));
    let count = bam_writer::write_reads(reads, &output)?;
    log::info!("wrote {count} reads to {}", output.display());

    writeln!(handle, "Extracted mapped reads written to {}", output.display())?;
    Ok(())
}
