//! Installs the grove native executable from GitHub Releases.
//!
//! Each release publishes one gzip-compressed executable per supported
//! platform. Installation resolves the host platform, downloads the matching
//! artifact, decompresses it fully in memory, and replaces the managed
//! executable next to the launcher with the permission bits set.
//!
//! The previous executable is removed before the download starts, so a failed
//! install leaves no executable behind rather than a stale one - callers must
//! treat a failed install as "nothing installed".

use flate2::read::GzDecoder;
use grove_core::platform::Platform;
use grove_core::release;
use grove_core::{Error, Result};
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A successfully installed executable.
#[derive(Debug)]
pub struct InstalledExecutable {
    /// Path of the managed executable.
    pub path: PathBuf,
    /// Release version that was installed.
    pub version: String,
    /// Platform the artifact was built for.
    pub platform: Platform,
    /// SHA-256 digest of the installed bytes, for display and logging.
    pub sha256: String,
}

/// Installer for the grove native executable.
pub struct Installer {
    client: Client,
    install_dir: PathBuf,
}

impl Installer {
    /// Create an installer that writes into `install_dir`.
    ///
    /// # Panics
    ///
    /// Uses `expect` on `reqwest::Client::builder().build()`, which only
    /// fails when the TLS backend cannot initialize - a system-level issue,
    /// not a recoverable condition.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(install_dir: PathBuf) -> Self {
        Self {
            client: Client::builder()
                .user_agent("grove-launcher")
                .build()
                .expect("failed to create HTTP client - TLS backend initialization failed"),
            install_dir,
        }
    }

    /// Install the artifact published for `version` on the current platform.
    ///
    /// The version is an opaque token used only for URL construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] before any network access when
    /// the host has no published artifact, [`Error::DownloadFailed`] on a
    /// non-success HTTP status, [`Error::Fetch`] on transport failures, and
    /// [`Error::Io`] when the executable cannot be written or marked
    /// executable. All errors are terminal; no retry is attempted.
    pub async fn install(&self, version: &str) -> Result<InstalledExecutable> {
        let platform = Platform::current()?;
        let url = release::download_url(version, platform);
        let target = self.install_dir.join(release::executable_name(platform.os));

        // Drop any previously installed executable first. A failed install
        // must never leave a stale, possibly incompatible binary in place.
        remove_existing(&target)?;

        info!(%url, "downloading grove release artifact");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::fetch(&url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::download_failed(&url, status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(&url, e.to_string()))?;
        debug!(bytes = body.len(), "downloaded artifact");

        let binary = gunzip(&body)?;
        write_executable(&target, &binary)?;

        let sha256 = format!("{:x}", Sha256::digest(&binary));
        info!(
            path = %target.display(),
            %version,
            %platform,
            %sha256,
            "installed grove executable"
        );

        Ok(InstalledExecutable {
            path: target,
            version: version.to_string(),
            platform,
            sha256,
        })
    }
}

/// Remove a previously installed executable. Absence is not an error.
fn remove_existing(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed previous executable");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(
            e,
            Some(path.to_path_buf()),
            "remove previous executable",
        )),
    }
}

/// Decompress a single-member gzip stream fully into memory.
///
/// Artifacts are small executables, so there is no need to stream the
/// decompression to disk.
fn gunzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(Cursor::new(data));
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::io(e, None, "decompress artifact"))?;
    Ok(out)
}

/// Write the executable bytes and mark the file executable by the owner.
///
/// Platforms without an executable bit skip the permission step.
fn write_executable(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(|e| Error::io(e, Some(path.to_path_buf()), "write executable"))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .map_err(|e| Error::io(e, Some(path.to_path_buf()), "read executable metadata"))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)
            .map_err(|e| Error::io(e, Some(path.to_path_buf()), "mark executable"))?;
    }

    Ok(())
}
