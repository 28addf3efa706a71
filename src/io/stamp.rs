use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;

pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Atomically replace `path` with `contents` (temp file in the same directory, then rename).
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Write the last-updated stamp read by the price viewer.
pub fn write_stamp(path: &Path, at: DateTime<Local>) -> Result<String> {
    let stamp = at.format(STAMP_FORMAT).to_string();
    write_atomic(path, format!("{}\n", stamp).as_bytes())?;
    Ok(stamp)
}
