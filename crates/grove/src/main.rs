//! Transparent wrapper around the installed grove executable.
//!
//! Forwards the argument vector, standard streams, and exit status verbatim.
//! The wrapper defines no flags of its own; everything after the program name
//! belongs to the native executable.

#![allow(clippy::print_stderr)]

use grove_core::{paths, release};
use std::ffi::OsString;

fn main() {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    std::process::exit(code);
}

fn run(args: &[OsString]) -> grove_core::Result<i32> {
    let executable = paths::install_dir()?.join(release::host_executable_name());
    grove::delegate::run(&executable, args)
}
