//! Release artifact naming and download URLs.
//!
//! Artifacts are gzip-compressed single executables published on GitHub
//! Releases, one per supported platform. URL construction is pure string
//! formatting over an opaque version token - the version is never parsed.

use crate::platform::{Os, Platform};

/// GitHub repository that publishes grove release artifacts.
pub const RELEASE_REPO: &str = "grove-lang/grove";

const RELEASE_HOST: &str = "https://github.com";

/// Asset name published for a platform, e.g. `grove-linux-x64.gz`.
#[must_use]
pub fn asset_name(platform: Platform) -> String {
    format!("grove-{}-{}.gz", platform.os, platform.arch)
}

/// Download URL for the artifact of a release version.
#[must_use]
pub fn download_url(version: &str, platform: Platform) -> String {
    format!(
        "{RELEASE_HOST}/{RELEASE_REPO}/releases/download/v{version}/{}",
        asset_name(platform)
    )
}

/// Local name of the managed executable for an OS family.
///
/// This is the invocation name, not the asset name: the launcher binary owns
/// the `grove` name, so the managed executable lives beside it as
/// `grove-native` (with the `.exe` suffix on Windows).
#[must_use]
pub const fn executable_name(os: Os) -> &'static str {
    match os {
        Os::Windows => "grove-native.exe",
        Os::Macos | Os::Linux => "grove-native",
    }
}

/// Managed executable name for the running host.
#[must_use]
pub const fn host_executable_name() -> &'static str {
    if cfg!(windows) {
        "grove-native.exe"
    } else {
        "grove-native"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Arch;

    #[test]
    fn test_asset_name() {
        assert_eq!(
            asset_name(Platform::new(Os::Linux, Arch::X64)),
            "grove-linux-x64.gz"
        );
        assert_eq!(
            asset_name(Platform::new(Os::Macos, Arch::Arm64)),
            "grove-macos-arm64.gz"
        );
        assert_eq!(
            asset_name(Platform::new(Os::Windows, Arch::X86)),
            "grove-windows-x86.gz"
        );
    }

    #[test]
    fn test_download_url() {
        let platform = Platform::new(Os::Linux, Arch::X64);
        assert_eq!(
            download_url("0.25.0", platform),
            "https://github.com/grove-lang/grove/releases/download/v0.25.0/grove-linux-x64.gz"
        );
    }

    #[test]
    fn test_download_url_is_pure() {
        let platform = Platform::new(Os::Macos, Arch::X64);
        assert_eq!(
            download_url("1.2.3", platform),
            download_url("1.2.3", platform)
        );
    }

    #[test]
    fn test_version_is_an_opaque_token() {
        // Nothing about the version is validated; it is spliced verbatim.
        let platform = Platform::new(Os::Linux, Arch::Arm64);
        assert!(download_url("next", platform).contains("/vnext/"));
    }

    #[test]
    fn test_executable_name_per_family() {
        assert_eq!(executable_name(Os::Windows), "grove-native.exe");
        assert_eq!(executable_name(Os::Linux), "grove-native");
        assert_eq!(executable_name(Os::Macos), "grove-native");
    }

    #[test]
    fn test_host_executable_name_matches_host_family() {
        let expected = if cfg!(windows) {
            executable_name(Os::Windows)
        } else {
            executable_name(Os::Linux)
        };
        assert_eq!(host_executable_name(), expected);
    }
}
