//! # Locate an amplicon in a BED file of primers
//!
//! Amplicon panels list one BED record per primer, named after the
//! amplicon with a suffix telling forward and reverse primers apart,
//! e.g. `AMP1_LEFT` and `AMP1_RIGHT`. The amplicon spans from the start
//! of its forward primer to the end of its reverse primer. Name matching
//! sits behind the [`PrimerMatch`] trait; [`SubstringMatch`] is the
//! matching rule used by the command line tool.

use crate::{AmpliconInterval, BedRecord, Error};

/// Which primer of an amplicon a BED record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimerSide {
    /// Forward primer, gives the amplicon start and contig
    Forward,
    /// Reverse primer, gives the amplicon end
    Reverse,
}

/// Amplicon name and the two suffixes that tag its primer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimerQuery<'a> {
    /// Amplicon name
    pub amplicon: &'a str,
    /// Suffix carried by forward primer names
    pub fwd_suffix: &'a str,
    /// Suffix carried by reverse primer names
    pub rev_suffix: &'a str,
}

/// Decides whether a BED record name belongs to a given primer.
pub trait PrimerMatch {
    /// Returns true if `name` is the primer of `amplicon` tagged by `suffix`.
    fn is_match(&self, name: &str, amplicon: &str, suffix: &str) -> bool;

    /// Classifies a record name against a query. A name that matches
    /// both suffixes is taken as a forward primer.
    fn side(&self, name: &str, query: &PrimerQuery<'_>) -> Option<PrimerSide> {
        if self.is_match(name, query.amplicon, query.fwd_suffix) {
            Some(PrimerSide::Forward)
        } else if self.is_match(name, query.amplicon, query.rev_suffix) {
            Some(PrimerSide::Reverse)
        } else {
            None
        }
    }
}

/// A name matches if it contains both the amplicon name and the suffix
/// anywhere. `AMP1` therefore also matches `AMP10_LEFT`; panels whose
/// amplicon names prefix one another need distinct suffixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringMatch;

impl PrimerMatch for SubstringMatch {
    fn is_match(&self, name: &str, amplicon: &str, suffix: &str) -> bool {
        name.contains(amplicon) && name.contains(suffix)
    }
}

/// Scans BED records in file order and returns the amplicon interval.
///
/// The first forward primer record fixes the contig and start; later
/// forward records are ignored. Each reverse primer record sets the end.
/// Scanning stops, and no further records are pulled from the iterator,
/// as soon as both start and end are known.
///
/// ```
/// use extract_amplicon_core::{BedRecord, PrimerQuery, SubstringMatch, find_amplicon};
/// let records = vec![
///     BedRecord { reference_name: "chr1".into(), start: 100, end: 120, name: "AMP1_LEFT".into() },
///     BedRecord { reference_name: "chr1".into(), start: 380, end: 400, name: "AMP1_RIGHT".into() },
/// ];
/// let query = PrimerQuery { amplicon: "AMP1", fwd_suffix: "_LEFT", rev_suffix: "_RIGHT" };
/// let amplicon = find_amplicon(records.into_iter().map(Ok), &query, &SubstringMatch)?;
/// assert_eq!(amplicon.to_string(), "chr1:100-400");
/// # Ok::<(), extract_amplicon_core::Error>(())
/// ```
///
/// # Errors
/// Returns `Error::AmpliconNotFound` if either primer is never seen,
/// `Error::InvalidAmpliconSpan` if the reverse primer does not end after
/// the forward primer starts, and passes on errors from reading records.
pub fn find_amplicon<I, M>(
    records: I,
    query: &PrimerQuery<'_>,
    matcher: &M,
) -> Result<AmpliconInterval, Error>
where
    I: IntoIterator<Item = Result<BedRecord, Error>>,
    M: PrimerMatch + ?Sized,
{
    let mut forward: Option<(String, u64)> = None;
    let mut end: Option<u64> = None;

    for r in records {
        let record = r?;
        match matcher.side(&record.name, query) {
            Some(PrimerSide::Forward) if forward.is_none() => {
                log::trace!("forward primer {} at {}", record.name, record.start);
                forward = Some((record.reference_name, record.start));
            }
            Some(PrimerSide::Reverse) => {
                log::trace!("reverse primer {} ending at {}", record.name, record.end);
                end = Some(record.end);
            }
            Some(PrimerSide::Forward) | None => {}
        }
        if forward.is_some() && end.is_some() {
            break;
        }
    }

    match (forward, end) {
        (Some((reference_name, start)), Some(end)) => {
            let amplicon =
                AmpliconInterval::new(reference_name, i64::try_from(start)?, i64::try_from(end)?)?;
            log::debug!("amplicon {} located at {amplicon}", query.amplicon);
            Ok(amplicon)
        }
        (fwd, rev) => Err(Error::AmpliconNotFound {
            amplicon: query.amplicon.to_string(),
            missing: match (fwd.is_none(), rev.is_none()) {
                (true, true) => "forward or reverse primer",
                (true, false) => "forward primer",
                _ => "reverse primer",
            }
            .to_string(),
        }),
    }
}
