//! `BedRecord` struct holding the first four columns of a BED line
//! Only chrom, start, end, name are needed to locate primers

use crate::Error;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// Number of leading BED columns we read; any further columns are ignored.
const BED_COLUMNS: [&str; 4] = ["chrom", "start", "end", "name"];

/// One primer entry from a BED file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedRecord {
    /// Contig name
    pub reference_name: String,
    /// Start, 0-based inclusive
    pub start: u64,
    /// End, exclusive
    pub end: u64,
    /// Primer name
    pub name: String,
}

impl BedRecord {
    /// Builds a record from a tab-split BED line. `line` is only used
    /// to make error messages point at the offending line.
    ///
    /// ```
    /// use csv::StringRecord;
    /// use extract_amplicon_core::BedRecord;
    /// let fields = StringRecord::from(vec!["chr1", "100", "120", "AMP1_LEFT", "1", "+"]);
    /// let record = BedRecord::from_fields(&fields, 1)?;
    /// assert_eq!(record.name, "AMP1_LEFT");
    /// assert_eq!((record.start, record.end), (100, 120));
    /// # Ok::<(), extract_amplicon_core::Error>(())
    /// ```
    ///
    /// # Errors
    /// Returns `Error::MalformedBedLine` if one of the first four columns
    /// is missing or empty, or if a coordinate is not a non-negative integer.
    pub fn from_fields(fields: &StringRecord, line: u64) -> Result<Self, Error> {
        let leading: StringRecord = fields
            .iter()
            .take(BED_COLUMNS.len())
            .map(str::trim)
            .collect();

        if let Some(column) = BED_COLUMNS
            .iter()
            .enumerate()
            .find_map(|(idx, column)| leading.get(idx).is_none_or(str::is_empty).then_some(column))
        {
            return Err(Error::MalformedBedLine {
                line,
                reason: format!("missing {column} column"),
            });
        }

        leading
            .deserialize(None)
            .map_err(|e| Error::MalformedBedLine {
                line,
                reason: e.to_string(),
            })
    }
}
