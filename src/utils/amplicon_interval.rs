//! `AmpliconInterval` struct for the genomic span of one amplicon
//! Carries the three overlap conditions used to select reads

use super::overlap::{Contains, Intersects};
use crate::Error;
use rust_htslib::bam;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Genomic span of an amplicon, 0-based, start inclusive and end exclusive.
/// `start < end` is guaranteed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmpliconInterval {
    reference_name: String,
    start: i64,
    end: i64,
}

impl AmpliconInterval {
    /// Constructor, will fail if start is not strictly before end.
    ///
    /// ```
    /// use extract_amplicon_core::AmpliconInterval;
    /// let amplicon = AmpliconInterval::new("chr1".to_string(), 100, 400)?;
    /// assert_eq!(amplicon.reference_name(), "chr1");
    /// assert_eq!((amplicon.start(), amplicon.end()), (100, 400));
    /// # Ok::<(), extract_amplicon_core::Error>(())
    /// ```
    ///
    /// ```
    /// use extract_amplicon_core::{AmpliconInterval, Error};
    /// let err = AmpliconInterval::new("chr1".to_string(), 400, 400).unwrap_err();
    /// assert!(matches!(err, Error::InvalidAmpliconSpan { start: 400, end: 400 }));
    /// ```
    ///
    /// # Errors
    /// Returns `Error::InvalidAmpliconSpan` if `start >= end`.
    pub fn new(reference_name: String, start: i64, end: i64) -> Result<Self, Error> {
        if start < end {
            Ok(AmpliconInterval {
                reference_name,
                start,
                end,
            })
        } else {
            Err(Error::InvalidAmpliconSpan { start, end })
        }
    }

    /// Gets the contig name
    #[must_use]
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    /// Gets the start, 0-based inclusive
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Gets the end, exclusive
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Looks up the numeric id of our contig in a BAM header.
    ///
    /// # Errors
    /// Returns `Error::ContigNotFound` if the header has no such contig.
    pub fn tid(&self, header: &bam::HeaderView) -> Result<u32, Error> {
        header
            .tid(self.reference_name.as_bytes())
            .ok_or_else(|| Error::ContigNotFound(self.reference_name.clone()))
    }

    /// Alignment starts at or before the amplicon start and reaches it.
    #[must_use]
    pub fn straddles_start(&self, read: &Range<i64>) -> bool {
        read.start <= self.start && read.end >= self.start
    }

    /// Alignment starts at or before the amplicon end and reaches it.
    #[must_use]
    pub fn straddles_end(&self, read: &Range<i64>) -> bool {
        read.start <= self.end && read.end >= self.end
    }
}

/// Alignment lies wholly inside the amplicon.
impl Contains<Range<i64>> for AmpliconInterval {
    fn contains(&self, val: &Range<i64>) -> bool {
        val.start >= self.start && val.end <= self.end
    }
}

/// An alignment intersects the amplicon if it is contained in it or
/// straddles either of its boundaries. Boundary contact counts.
impl Intersects<Range<i64>> for AmpliconInterval {
    fn intersects(&self, val: &Range<i64>) -> bool {
        self.contains(val) || self.straddles_start(val) || self.straddles_end(val)
    }
}

/// Displays the interval in the usual `contig:start-end` form.
impl fmt::Display for AmpliconInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.reference_name, self.start, self.end)
    }
}
