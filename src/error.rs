//! # Error
//!
//! Covers all errors in our module. These errors arise from locating an
//! amplicon in a BED file, pulling the reads of that amplicon out of an
//! indexed BAM file, trimming them, and writing them back out. We convert
//! errors from other packages to this error type so that error handling
//! in our package becomes easier.

use std::io;
use std::num::{ParseIntError, TryFromIntError};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Enum that covers errors in our module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The amplicon name, or one of its primer suffixes, never matched
    /// a record name in the BED file.
    #[error("amplicon '{amplicon}' not found in the BED file: no record for the {missing}")]
    AmpliconNotFound {
        /// Amplicon name that was searched for
        amplicon: String,
        /// Which primer record(s) could not be found
        missing: String,
    },

    /// Located amplicon does not satisfy start < end
    #[error("invalid amplicon span: start {start} is not before end {end}")]
    InvalidAmpliconSpan {
        /// Start taken from the forward primer record
        start: i64,
        /// End taken from the reverse primer record
        end: i64,
    },

    /// Contig of the amplicon is absent from the BAM header
    #[error("contig '{0}' not found in the BAM file")]
    ContigNotFound(String),

    /// A BED line lacks one of the first four fields or has bad coordinates
    #[error("malformed BED line {line}: {reason}")]
    MalformedBedLine {
        /// One-based line number in the BED file
        line: u64,
        /// What is wrong with the line
        reason: String,
    },

    /// A read that needs trimming has no base qualities
    #[error("read '{0}' has no base qualities, cannot trim it")]
    MissingQualities(String),

    /// The read used as a header template carries no header
    #[error("read '{0}' is not linked to a BAM header")]
    MissingHeader(String),

    /// No reads left to write after selection
    #[error("no reads overlap the amplicon, nothing to write")]
    NothingToWrite,

    /// Read is unmapped, use this whenever some function
    /// meant for a mapped read is called on an unmapped read
    #[error("read is unmapped")]
    Unmapped,

    /// An input path could not be resolved to a real path
    #[error("cannot resolve path '{path}': {source}")]
    PathResolution {
        /// Path as given on the command line
        path: String,
        /// Underlying error
        source: io::Error,
    },

    /// Some error from the rust htslib library we use to read BAM files
    #[error("rust_htslib error: `{0}`")]
    RustHtslibError(#[from] rust_htslib::errors::Error),

    /// Problem reading or parsing the BED file
    #[error("error reading BED file: `{0}`")]
    CsvError(#[from] csv::Error),

    /// Problem parsing integers
    #[error("integer parsing error: `{0}`")]
    IntParseError(#[from] ParseIntError),

    /// Error upon conversion from integer
    #[error("integer conversion error: `{0}`")]
    IntConversionError(#[from] TryFromIntError),

    /// Error converting from UTF-8 bytes to string
    #[error("UTF-8 conversion error: `{0}`")]
    Utf8ConversionError(#[from] FromUtf8Error),

    /// Generic Input-Output error
    #[error("input output error: `{0}`")]
    InputOutputError(#[from] io::Error),
}
