//! # Write the trimmed reads of an amplicon
//!
//! The output header is rebuilt from the header the first read was
//! loaded with, so the output carries the same contigs, read groups and
//! program lines as the input. Output goes through
//! [`write_bam_atomic`](crate::file_utils::write_bam_atomic), so an
//! output file only appears once every read has been written.

use crate::{AlignedRead, Error, file_utils::write_bam_atomic};
use rust_htslib::bam;
use std::path::Path;

/// Writes reads to a new BAM file, in the order given, and returns the
/// number of records written.
///
/// # Errors
/// Returns `Error::NothingToWrite` for an empty read list,
/// `Error::MissingHeader` if the first read carries no header, and errors
/// from converting reads back to records or writing them.
pub fn write_reads<P>(reads: Vec<AlignedRead>, output_path: P) -> Result<usize, Error>
where
    P: AsRef<Path>,
{
    let header = {
        let first = reads.first().ok_or(Error::NothingToWrite)?;
        let template = first
            .header()
            .ok_or_else(|| Error::MissingHeader(first.read_id().to_string()))?;
        bam::Header::from_template(template)
    };

    write_bam_atomic(
        reads.into_iter().map(AlignedRead::into_record),
        &header,
        output_path.as_ref(),
    )
}
