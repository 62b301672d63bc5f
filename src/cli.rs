//! # Cli
//!
//! This file provides the amplicon inputs of the command line interface.
use crate::PrimerQuery;
use clap::Args;

/// Input BAM and BED files and the names used to find the amplicon.
/// This struct is parsed to create command line arguments and then passed
/// on to the lookup and selection stages.
#[derive(Debug, Clone, Args)]
#[non_exhaustive]
pub struct InputAmplicon {
    /// Input BAM file, sorted and indexed
    pub bam_path: String,
    /// BED file of primer coordinates (chrom, start, end, name, ...)
    pub bed_path: String,
    /// Name of the amplicon of interest
    pub amplicon_name: String,
    /// Suffix on the names of forward primers (e.g. _LEFT)
    #[clap(allow_hyphen_values = true)]
    pub fwd_primer_suffix: String,
    /// Suffix on the names of reverse primers (e.g. _RIGHT)
    #[clap(allow_hyphen_values = true)]
    pub rev_primer_suffix: String,
}

impl InputAmplicon {
    /// Names to search for in the BED file
    #[must_use]
    pub fn primer_query(&self) -> PrimerQuery<'_> {
        PrimerQuery {
            amplicon: &self.amplicon_name,
            fwd_suffix: &self.fwd_primer_suffix,
            rev_suffix: &self.rev_primer_suffix,
        }
    }
}
