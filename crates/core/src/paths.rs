//! Filesystem locations used by the launcher.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory that holds the managed executable: the directory containing the
/// running launcher binary.
///
/// # Errors
///
/// Returns an error if the launcher's own path cannot be determined.
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::io(e, None, "locate the running launcher"))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "executable has no parent directory"),
            Some(exe),
            "locate the install directory",
        )
    })
}
