//! Filesystem checks performed before any command touches a document.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub fn require_inputs<P: AsRef<Path>>(inputs: &[P], required: usize) -> Result<()> {
    if inputs.len() < required {
        return Err(Error::InsufficientInputs {
            required,
            given: inputs.len(),
        });
    }
    Ok(())
}

pub fn ensure_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    Ok(())
}

/// Refuse to clobber an existing file unless `force` is set.
pub fn ensure_can_write<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(Error::OutputExists(path.to_path_buf()));
    }
    Ok(())
}

pub fn ensure_distinct<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    if same_path(input.as_ref(), output.as_ref()) {
        return Err(Error::SameFileConflict(output.as_ref().to_path_buf()));
    }
    Ok(())
}

fn same_path(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (a.canonicalize(), b.canonicalize()) {
        return a == b;
    }
    match (std::path::absolute(a), std::path::absolute(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Validate an image output directory and create it if needed.
///
/// An existing non-empty directory is only reused with `force`.
pub fn prepare_output_dir<P: AsRef<Path>>(dir: P, force: bool) -> Result<()> {
    let dir = dir.as_ref();
    if dir.exists() {
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }
        let occupied = fs::read_dir(dir)?.next().is_some();
        if occupied && !force {
            return Err(Error::OutputExists(dir.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| Error::from_write(e, dir))
}

/// Open `path` for writing. The handle is closed when the writer is dropped.
pub fn create_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let path: PathBuf = path.as_ref().to_path_buf();
    File::create(&path)
        .map(BufWriter::new)
        .map_err(|e| Error::from_write(e, path))
}
