//! Transparent delegation to the installed grove executable.

use grove_core::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Exit status reported when the child terminates without one, e.g. when it
/// is killed by a signal.
pub const ABNORMAL_EXIT: i32 = 1;

/// Run `executable` with `args`, wiring the caller's standard streams
/// straight through, and return the child's exit status.
///
/// Arguments are passed unchanged and in order; nothing about them is
/// interpreted here. The call blocks until the child has fully exited.
///
/// # Errors
///
/// Returns [`Error::Spawn`] when the child cannot be started at all (missing
/// or non-executable target) - distinct from a child that started and exited
/// non-zero, which is reported through the returned status.
pub fn run(executable: &Path, args: &[OsString]) -> Result<i32> {
    debug!(executable = %executable.display(), ?args, "delegating invocation");

    let status = Command::new(executable)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::spawn(executable, e))?;

    Ok(status.code().unwrap_or(ABNORMAL_EXIT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_script(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("fake-grove");
        std::fs::write(&path, body).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_propagates_zero_exit() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "#!/bin/sh\nexit 0\n");
        assert_eq!(run(&script, &[]).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_propagates_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "#!/bin/sh\nexit 42\n");
        assert_eq!(run(&script, &[]).unwrap(), 42);
    }

    #[cfg(unix)]
    #[test]
    fn test_forwards_arguments_in_order() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("args.txt");
        let script = write_script(
            dir.path(),
            &format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\n", out.display()),
        );

        let args: Vec<OsString> = ["parse", "--quiet", "src/main.gr"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(run(&script, &args).unwrap(), 0);

        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "parse\n--quiet\nsrc/main.gr\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_death_maps_to_sentinel() {
        let dir = TempDir::new().unwrap();
        let script = write_script(dir.path(), "#!/bin/sh\nkill -TERM $$\n");
        assert_eq!(run(&script, &[]).unwrap(), ABNORMAL_EXIT);
    }

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("grove-native");
        let err = run(&missing, &[]).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }), "got {err:?}");
    }
}
