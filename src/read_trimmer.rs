//! # Trim reads to an amplicon
//!
//! Bases hanging over either end of the amplicon are cut off the
//! sequence and qualities, and the read coordinates are moved onto the
//! amplicon boundaries. The cut is a plain slice of the read: one base
//! per reference position is assumed, and the CIGAR is left as it was.

use crate::{AlignedRead, AmpliconInterval, Error};

/// Clips one read to the amplicon.
///
/// The start is clipped first. The number of bases kept at the end is
/// then measured from the start as it stands after that first clip.
///
/// # Errors
/// Returns `Error::MissingQualities` if the read needs clipping but has no
/// base qualities.
pub fn trim_read(mut read: AlignedRead, amplicon: &AmpliconInterval) -> Result<AlignedRead, Error> {
    if read.start() < amplicon.start() {
        let overhang = usize::try_from(amplicon.start() - read.start())?;
        read.clip_front(overhang)?;
        read.set_start(amplicon.start());
    }
    if read.end() > amplicon.end() {
        let keep = usize::try_from((amplicon.end() - read.start()).max(0))?;
        read.truncate(keep)?;
        read.set_end(amplicon.end());
    }
    Ok(read)
}

/// Clips every read to the amplicon, keeping their order.
///
/// # Errors
/// Stops at the first read that cannot be clipped, see [`trim_read`].
pub fn trim_reads(reads: Vec<AlignedRead>, amplicon: &AmpliconInterval) -> Result<Vec<AlignedRead>, Error> {
    let trimmed = reads
        .into_iter()
        .map(|read| trim_read(read, amplicon))
        .collect::<Result<Vec<_>, _>>()?;

    let n_clipped = trimmed.iter().filter(|r| r.is_trimmed()).count();
    if n_clipped > 0 {
        log::warn!(
            "{n_clipped} of {} reads were clipped to {amplicon}; their CIGAR strings are left unadjusted",
            trimmed.len()
        );
    }
    Ok(trimmed)
}
