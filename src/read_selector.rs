//! # Select the reads of an amplicon
//!
//! Reads are fetched from an indexed BAM file over the amplicon span and
//! then filtered again: a read is kept if it is mapped, lies inside the
//! amplicon or reaches across one of its boundaries, and is not a
//! junction read. Reads are kept in the order the index yields them.

use crate::{AlignedRead, AmpliconInterval, Error, Intersects as _};
use rust_htslib::bam::{self, Read as _};

/// Upstream naming marks reads from junction-spanning alignments this way
const JUNCTION_MARKER: &str = "junction";

/// Whether the read id marks a junction read, which we never keep.
#[must_use]
pub fn is_junction_read(read_id: &str) -> bool {
    read_id.contains(JUNCTION_MARKER)
}

/// Filters records down to the reads of the amplicon.
///
/// # Errors
/// Returns an error if a record cannot be read or has a non UTF-8 read id.
pub fn select_reads<I>(records: I, amplicon: &AmpliconInterval) -> Result<Vec<AlignedRead>, Error>
where
    I: IntoIterator<Item = Result<bam::Record, rust_htslib::errors::Error>>,
{
    let mut selected = Vec::new();
    let mut seen: usize = 0;

    for r in records {
        let record = r?;
        seen += 1;
        if record.is_unmapped() {
            continue;
        }
        let read = AlignedRead::try_from(record)?;
        if !amplicon.intersects(&read.span()) {
            log::trace!("{} at {:?} misses {amplicon}", read.read_id(), read.span());
            continue;
        }
        if is_junction_read(read.read_id()) {
            log::trace!("{} dropped as a junction read", read.read_id());
            continue;
        }
        selected.push(read);
    }

    log::debug!(
        "kept {} of {seen} fetched records for {amplicon}",
        selected.len()
    );
    Ok(selected)
}

/// Fetches the amplicon region from an indexed BAM file and selects reads.
///
/// # Errors
/// Returns `Error::ContigNotFound` if the amplicon contig is absent from the
/// BAM header, or errors from fetching and reading records.
pub fn fetch_amplicon_reads(
    bam_reader: &mut bam::IndexedReader,
    amplicon: &AmpliconInterval,
) -> Result<Vec<AlignedRead>, Error> {
    let tid = i32::try_from(amplicon.tid(bam_reader.header())?)?;
    bam_reader.fetch(bam::FetchDefinition::Region(
        tid,
        amplicon.start(),
        amplicon.end(),
    ))?;
    select_reads(bam_reader.records(), amplicon)
}
