//! Utility functions for file I/O operations with BAM and BED files.

use crate::{BedRecord, Error};
use csv::{ReaderBuilder, StringRecord};
use rust_htslib::bam;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Resolves symbolic links and relative components in a path.
///
/// # Errors
///
/// Returns `Error::PathResolution` if the path does not exist or cannot be
/// resolved.
pub fn resolve_path(path: &str) -> Result<PathBuf, Error> {
    fs::canonicalize(path).map_err(|source| Error::PathResolution {
        path: path.to_string(),
        source,
    })
}

/// Opens an indexed BAM file. No region is fetched yet, so the header
/// can be checked before asking the index for reads.
///
/// # Errors
///
/// Returns an error if the BAM file cannot be opened, or if its index
/// is missing or malformed.
pub fn indexed_bam_reader<P>(bam_path: P) -> Result<bam::IndexedReader, Error>
where
    P: AsRef<Path>,
{
    Ok(bam::IndexedReader::from_path(bam_path)?)
}

/// `track` and `browser` lines, and lines of only whitespace, carry no
/// primer records.
fn is_bed_header(fields: &StringRecord) -> bool {
    match fields.get(0).map(str::trim_start) {
        Some(v) if v.starts_with("track") || v.starts_with("browser") => true,
        Some("") => fields.len() == 1,
        _ => false,
    }
}

/// Opens a BED file and returns its records lazily, in file order.
/// Lines starting with `#` are skipped, as are `track` and `browser` lines.
/// Only the first four columns of each line are read.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. Errors on individual lines
/// are returned by the iterator.
///
/// ```
/// use extract_amplicon_core::{Error, file_utils::bed_records};
/// use std::fs;
/// use uuid::Uuid;
///
/// let temp_path = std::env::temp_dir().join(format!("{}.bed", Uuid::new_v4()));
/// fs::write(&temp_path, "# primers\nchr1\t100\t120\tAMP1_LEFT\t1\t+\n")?;
/// let records = bed_records(&temp_path)?.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "AMP1_LEFT");
/// fs::remove_file(&temp_path)?;
/// # Ok::<(), Error>(())
/// ```
pub fn bed_records<P>(bed_path: P) -> Result<impl Iterator<Item = Result<BedRecord, Error>>, Error>
where
    P: AsRef<Path>,
{
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .quoting(false)
        .flexible(true)
        .from_path(bed_path)?;

    Ok(reader.into_records().filter_map(|r| match r {
        Err(e) => Some(Err(Error::from(e))),
        Ok(fields) if is_bed_header(&fields) => None,
        Ok(fields) => {
            let line = fields.position().map_or(0, csv::Position::line);
            Some(BedRecord::from_fields(&fields, line))
        }
    }))
}

/// Temporary path next to the final output, so that the final rename
/// stays on one filesystem.
fn temp_sibling(output_path: &Path) -> Result<PathBuf, Error> {
    let file_name = output_path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path '{}' has no file name", output_path.display()),
        )
    })?;
    Ok(output_path.with_file_name(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4()
    )))
}

/// Writes records to a BAM file and closes it
fn write_records<I>(records: I, header: &bam::Header, path: &Path) -> Result<usize, Error>
where
    I: IntoIterator<Item = Result<bam::Record, Error>>,
{
    let mut writer = bam::Writer::from_path(path, header, bam::Format::Bam)?;
    let mut count: usize = 0;
    for r in records {
        writer.write(&r?)?;
        count += 1;
    }
    drop(writer); // Close BAM file before it is moved into place
    Ok(count)
}

/// Writes records to a BAM file in the order given and returns how many
/// were written. The data go to a temporary file beside `output_path`,
/// which is renamed onto `output_path` only once all records are written
/// and the file is closed. On any failure the temporary file is removed
/// and `output_path` is left as it was.
///
/// # Errors
///
/// Returns an error if a record is an error, or if the file cannot be
/// created, written, or renamed.
///
/// ```
/// use extract_amplicon_core::{Error, file_utils::write_bam_atomic};
/// use rust_htslib::bam;
/// use uuid::Uuid;
///
/// let mut header = bam::Header::new();
/// let _: &mut _ = header.push_record(
///     bam::header::HeaderRecord::new(b"SQ").push_tag(b"SN", "chr1").push_tag(b"LN", 1000),
/// );
/// let temp_path = std::env::temp_dir().join(format!("{}.bam", Uuid::new_v4()));
/// let count = write_bam_atomic(Vec::<Result<bam::Record, Error>>::new(), &header, &temp_path)?;
/// assert_eq!(count, 0);
/// assert!(temp_path.exists());
/// std::fs::remove_file(&temp_path)?;
/// # Ok::<(), Error>(())
/// ```
pub fn write_bam_atomic<I>(
    records: I,
    header: &bam::Header,
    output_path: &Path,
) -> Result<usize, Error>
where
    I: IntoIterator<Item = Result<bam::Record, Error>>,
{
    let temp_path = temp_sibling(output_path)?;
    let result = write_records(records, header, &temp_path).and_then(|count| {
        fs::rename(&temp_path, output_path)?;
        Ok(count)
    });
    if result.is_err() {
        if let Err(e) = fs::remove_file(&temp_path) {
            log::debug!("could not remove {}: {e}", temp_path.display());
        }
    }
    result
}
