use crate::error::{Result, ScratchyError};
use glob::glob;
use std::fs;
use std::path::PathBuf;

/// Files found for a run, in the order they will be parsed.
#[derive(Debug, Default)]
pub struct Scan {
    /// Every path the patterns matched, files or not
    pub matched: usize,
    /// The regular files among them (symlinks are not followed)
    pub files: Vec<PathBuf>,
}

/// Expands each pattern in turn and keeps the regular files.
///
/// Pattern order is preserved and matches are not de-duplicated, so a file
/// matched by two patterns is scanned twice.
pub fn scan<S: AsRef<str>>(patterns: &[S]) -> Result<Scan> {
    let mut result = Scan::default();

    for pattern in patterns {
        for entry in glob(pattern.as_ref())? {
            let path = entry?;
            result.matched += 1;

            let meta = fs::symlink_metadata(&path).map_err(|e| ScratchyError::file(&path, e))?;
            if meta.is_file() {
                result.files.push(path);
            }
        }
    }

    Ok(result)
}
