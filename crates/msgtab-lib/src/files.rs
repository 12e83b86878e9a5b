//! Catalog input and header output on disk.
//!
//! The header is never written in place: it goes to a temporary file in the
//! destination directory which is then renamed over the destination, so a
//! failed run leaves either the previous header or nothing.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

pub fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces `path` with `contents` atomically.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    keep_permissions(file.as_file(), path).map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Whether `path` already holds exactly `contents`. A missing file is out of date.
pub fn is_up_to_date(path: &Path, contents: &str) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == contents.as_bytes()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Temporary files are created owner-only; give the new file the permissions
/// of the file it replaces, or the usual ones for a fresh file.
fn keep_permissions(file: &fs::File, destination: &Path) -> io::Result<()> {
    match fs::metadata(destination) {
        Ok(meta) => file.set_permissions(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => set_default_permissions(file),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
