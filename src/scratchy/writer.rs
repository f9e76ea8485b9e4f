//! # Writer
//!
//! Turns a filled [`FragmentStore`] into files on disk, one per output path.
//!
//! The target for a path `<dir>/<leaf>` is `<root><dir>/<leaf><extension>`,
//! built by plain concatenation, so `/intro/welcome` under `docs` becomes
//! `docs/intro/welcome.txt`.
//!
//! Existing files are never touched: no overwrite, no append, no merge. Such
//! paths are reported as skipped and the run carries on. Every other I/O error
//! ends the run.

use crate::error::{Result, ScratchyError};
use crate::model::OutputPath;
use crate::store::FragmentStore;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub struct Writer {
    root: PathBuf,
    extension: String,
}

impl Writer {
    pub fn new<P: Into<PathBuf>>(root: P, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.to_string(),
        }
    }

    pub fn target_for(&self, path: &OutputPath) -> PathBuf {
        let (dir, leaf) = path.split();
        let mut target = OsString::from(self.root.as_os_str());
        target.push(dir);
        target.push("/");
        target.push(leaf);
        target.push(&self.extension);
        PathBuf::from(target)
    }

    pub fn write(&self, store: &FragmentStore) -> Result<WriteReport> {
        let mut report = WriteReport::default();

        for path in store.paths() {
            let target = self.target_for(path);
            if target.is_file() {
                report.skipped.push(target);
                continue;
            }

            if let Some(parent) = target.parent() {
                ensure_dir(parent)?;
            }
            write_doc(&target, store, path)?;
            report.written.push(target);
        }

        Ok(report)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(|e| ScratchyError::file(path, e))?;
    }
    Ok(())
}

fn write_doc(target: &Path, store: &FragmentStore, path: &OutputPath) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(target)
        .map_err(|e| ScratchyError::file(target, e))?;
    let mut out = BufWriter::new(file);

    for chunk in store.ordered_chunks(path) {
        for line in &chunk.lines {
            out.write_all(line.as_bytes())
                .map_err(|e| ScratchyError::file(target, e))?;
        }
    }

    out.flush().map_err(|e| ScratchyError::file(target, e))?;
    Ok(())
}
