//! Core types for the grove launcher.
//!
//! The launcher ships in two halves: an installer that fetches the prebuilt
//! `grove` executable published for the host platform, and a wrapper that
//! transparently forwards every invocation to it. This crate holds the pieces
//! both halves share: platform identification, release artifact naming, the
//! install location, and the error type.

pub mod error;
pub mod paths;
pub mod platform;
pub mod release;

pub use error::{Error, Result};
