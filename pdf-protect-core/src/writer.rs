//! Atomic output writes
//!
//! The encrypted document is written to a temporary file next to the
//! destination and renamed over it, so the destination either keeps its old
//! contents or holds the complete new document.

use crate::error::{ProtectError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Write `bytes` to `path`, replacing any existing file in a single rename.
///
/// A replaced file keeps its permissions.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".pdf-protect-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            temp.as_file().set_permissions(existing.permissions())?;
        }
    }

    debug!(temp = %temp.path().display(), target = %path.display(), "persisting output");
    temp.persist(path).map_err(|e| ProtectError::Io(e.error))?;
    Ok(())
}
