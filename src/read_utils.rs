//! # ReadUtils
//!
//! Implements the `AlignedRead` struct, which takes ownership of one mapped
//! BAM record and exposes the fields we select and trim on: read id,
//! reference start and end, sequence and base qualities.

use rust_htslib::bam::{self, ext::BamRecordExtensions as _};
use std::ops::Range;

use crate::Error;

/// Base quality value used by BAM files to mark absent qualities.
const MISSING_QUAL: u8 = 0xff;

/// One mapped read taken from a BAM file, ready for trimming.
/// All fields are private so that the sequence and qualities cannot
/// drift apart in length; they are changed together through the
/// clipping methods below. Everything we do not touch (flags, CIGAR,
/// mate information, aux tags, header linkage) stays in the wrapped
/// record and is written out as is.
#[derive(Debug, Clone)]
pub struct AlignedRead {
    /// Read ID of molecule, also called query name in some contexts
    read_id: String,

    /// Reference start, 0-based
    start: i64,

    /// Reference end, exclusive. Derived from the CIGAR on loading and
    /// only reassigned by trimming afterwards.
    end: i64,

    /// Basecalled sequence as stored in the record
    seq: Vec<u8>,

    /// Base qualities, `None` if the BAM file does not store them
    qual: Option<Vec<u8>>,

    /// Whether any clipping has been applied
    is_trimmed: bool,

    /// The record we came from
    record: bam::Record,
}

impl TryFrom<bam::Record> for AlignedRead {
    type Error = Error;

    /// Takes ownership of a mapped record.
    ///
    /// # Errors
    /// Returns `Error::Unmapped` for unmapped records, or an error if the
    /// read id is not valid UTF-8.
    fn try_from(record: bam::Record) -> Result<Self, Self::Error> {
        if record.is_unmapped() {
            return Err(Error::Unmapped);
        }
        let read_id = String::from_utf8(record.qname().to_vec())?;
        let seq = record.seq().as_bytes();
        let qual = match record.qual() {
            v if v.first() == Some(&MISSING_QUAL) => None,
            v if v.len() != seq.len() => None,
            v => Some(v.to_vec()),
        };
        Ok(AlignedRead {
            read_id,
            start: record.pos(),
            end: record.reference_end(),
            seq,
            qual,
            is_trimmed: false,
            record,
        })
    }
}

impl AlignedRead {
    /// Gets the read id
    #[must_use]
    pub fn read_id(&self) -> &str {
        &self.read_id
    }

    /// Gets the reference start
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Gets the reference end
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Gets the reference span as a half-open range
    #[must_use]
    pub fn span(&self) -> Range<i64> {
        self.start..self.end
    }

    /// Gets the sequence
    #[must_use]
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    /// Gets the base qualities if the record has them
    #[must_use]
    pub fn qual(&self) -> Option<&[u8]> {
        self.qual.as_deref()
    }

    /// Whether any clipping has been applied to this read
    #[must_use]
    pub fn is_trimmed(&self) -> bool {
        self.is_trimmed
    }

    /// Gets the header of the file this read was loaded from, if any
    #[must_use]
    pub fn header(&self) -> Option<&bam::HeaderView> {
        self.record.header()
    }

    /// Moves the reference start; the sequence is not touched.
    pub fn set_start(&mut self, start: i64) {
        self.start = start;
        self.is_trimmed = true;
    }

    /// Moves the reference end; the sequence is not touched.
    pub fn set_end(&mut self, end: i64) {
        self.end = end;
        self.is_trimmed = true;
    }

    /// Drops `count` bases from the front of sequence and qualities.
    /// Dropping more bases than the read has leaves it empty.
    ///
    /// # Errors
    /// Returns `Error::MissingQualities` if the read has no qualities.
    pub fn clip_front(&mut self, count: usize) -> Result<(), Error> {
        let qual = self
            .qual
            .as_mut()
            .ok_or_else(|| Error::MissingQualities(self.read_id.clone()))?;
        let count = count.min(self.seq.len());
        self.seq = self.seq.split_off(count);
        *qual = qual.split_off(count);
        self.is_trimmed = true;
        Ok(())
    }

    /// Keeps only the first `len` bases of sequence and qualities.
    /// Keeping more bases than the read has is a no-op on the sequence.
    ///
    /// # Errors
    /// Returns `Error::MissingQualities` if the read has no qualities.
    pub fn truncate(&mut self, len: usize) -> Result<(), Error> {
        let qual = self
            .qual
            .as_mut()
            .ok_or_else(|| Error::MissingQualities(self.read_id.clone()))?;
        self.seq.truncate(len);
        qual.truncate(len);
        self.is_trimmed = true;
        Ok(())
    }

    /// Gives back the BAM record. Untrimmed reads return their record
    /// unchanged. Trimmed reads get their new sequence, qualities and start
    /// written in; the CIGAR is carried over as is and will not agree with
    /// the trimmed sequence.
    ///
    /// # Errors
    /// Returns `Error::MissingQualities` if a trimmed read has no qualities.
    pub fn into_record(self) -> Result<bam::Record, Error> {
        let AlignedRead {
            read_id,
            start,
            seq,
            qual,
            is_trimmed,
            mut record,
            ..
        } = self;
        if !is_trimmed {
            return Ok(record);
        }
        let qual = qual.ok_or(Error::MissingQualities(read_id))?;
        let qname = record.qname().to_vec();
        let cigar = record.cigar().take();
        record.set(&qname, Some(&cigar), &seq, &qual);
        record.set_pos(start);
        Ok(record)
    }
}
