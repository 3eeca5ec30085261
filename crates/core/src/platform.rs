//! Host platform identification.
//!
//! Release artifacts are published per `(os, arch)` pair, and each OS family
//! ships a different set of architectures. The table lives in
//! [`Platform::is_supported`] as an exhaustive match so an unrecognized
//! combination is an explicit `None`, never a silent fallback.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Platform identifier combining OS family and CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    /// Create a new platform.
    #[must_use]
    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Resolve raw host identifiers to a release platform.
    ///
    /// Pure and deterministic. Returns `None` when either identifier is
    /// unrecognized or when the pair has no published artifact - an OS match
    /// with an unmapped architecture counts as unsupported, not as a partial
    /// match.
    #[must_use]
    pub fn resolve(os_id: &str, arch_id: &str) -> Option<Self> {
        let os = Os::parse(os_id)?;
        let arch = Arch::parse(arch_id)?;
        let platform = Self::new(os, arch);
        platform.is_supported().then_some(platform)
    }

    /// Get the platform of the running host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] carrying the host's raw OS and
    /// architecture identifiers when no release artifact exists for them.
    pub fn current() -> Result<Self> {
        use std::env::consts::{ARCH, OS};
        Self::resolve(OS, ARCH).ok_or_else(|| Error::unsupported_platform(OS, ARCH))
    }

    /// Whether a release artifact is published for this pair.
    const fn is_supported(self) -> bool {
        match self.os {
            Os::Macos => matches!(self.arch, Arch::Arm64 | Arch::X64),
            // Every release architecture has a Linux build.
            Os::Linux => true,
            Os::Windows => matches!(self.arch, Arch::Arm64 | Arch::X64 | Arch::X86),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Macos,
    Linux,
    Windows,
}

impl Os {
    /// Parse a host-reported OS identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "macos" | "darwin" => Some(Self::Macos),
            "linux" => Some(Self::Linux),
            "windows" | "win32" => Some(Self::Windows),
            _ => None,
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Macos => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Arm64,
    Arm,
    X64,
    X86,
    Powerpc64,
}

impl Arch {
    /// Parse a host-reported architecture identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arm64" | "aarch64" => Some(Self::Arm64),
            "arm" => Some(Self::Arm),
            "x64" | "x86_64" | "amd64" => Some(Self::X64),
            "x86" | "i686" | "ia32" => Some(Self::X86),
            "powerpc64" | "ppc64" => Some(Self::Powerpc64),
            _ => None,
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arm64 => write!(f, "arm64"),
            Self::Arm => write!(f, "arm"),
            Self::X64 => write!(f, "x64"),
            Self::X86 => write!(f, "x86"),
            Self::Powerpc64 => write!(f, "powerpc64"),
        }
    }
}
