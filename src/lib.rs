//! # extract_amplicon
//!
//! Pulls the reads of one PCR amplicon out of a sorted, indexed BAM file
//! and trims any overhang beyond the amplicon's primers. The amplicon is
//! located in a BED file of primer coordinates by looking for a forward
//! and a reverse primer whose names carry the amplicon name and a primer
//! suffix. The pipeline runs in four stages, each in its own module:
//! [`bed_lookup`], [`read_selector`], [`read_trimmer`] and [`bam_writer`].
//!
//! Trimming slices sequence and qualities and moves the read start; the
//! CIGAR of a trimmed read is not adjusted.

// Declare the modules.
pub mod bam_writer;
pub mod bed_lookup;
pub mod cli;
pub mod commands;
pub mod error;
pub mod file_utils;
pub mod read_selector;
pub mod read_trimmer;
pub mod read_utils;
pub mod utils;

// Re-exports
pub use bam_writer::write_reads;
pub use bed_lookup::{PrimerMatch, PrimerQuery, PrimerSide, SubstringMatch, find_amplicon};
pub use cli::InputAmplicon;
pub use error::Error;
pub use file_utils::{bed_records, indexed_bam_reader, resolve_path, write_bam_atomic};
pub use read_selector::{fetch_amplicon_reads, is_junction_read, select_reads};
pub use read_trimmer::{trim_read, trim_reads};
pub use read_utils::AlignedRead;
pub use utils::{AmpliconInterval, BedRecord, Contains, Intersects};
