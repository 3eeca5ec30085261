//! The grove launcher binaries.
//!
//! `grove` forwards every invocation to the installed native executable;
//! `grove-install` downloads and installs that executable for the host
//! platform. Delegation lives here so both the binary and its tests can
//! exercise it.

pub mod delegate;
