//! CSV file delivery.
//!
//! Writes a finished CSV payload to disk with a UTF-8 byte-order mark so
//! spreadsheet tools detect the encoding. The payload goes to a temp file
//! in the destination directory first and is persisted (renamed) on
//! success, so an interrupted write never leaves a corrupt partial export
//! behind; the temp handle is released on any failure.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// UTF-8 byte-order mark prepended to every export.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `csv` to `path` as a BOM-prefixed UTF-8 file.
///
/// The write is atomic at the filesystem level: the content lands in a
/// temporary file alongside the destination and is renamed into place
/// only once fully written.
pub fn write_csv_file<P: AsRef<Path>>(path: P, csv: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());

    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };
    tmp.write_all(UTF8_BOM)?;
    tmp.write_all(csv.as_bytes())?;
    tmp.flush()?;

    // persist consumes the handle; on error the temp file is cleaned up
    // when the returned handle drops.
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
