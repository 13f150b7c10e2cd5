//! External formatter invocation.

use std::io::ErrorKind;
use std::process::Command;

/// Run an external formatter over generated sources.
///
/// Returns true when the formatter ran and exited successfully. A
/// missing executable, a spawn failure, or a non-zero exit all degrade
/// to a warning; this step never blocks or fails generation.
pub fn run_formatter(program: &str, args: &[&str]) -> bool {
    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!("warning: {program} exited with {status}, leaving sources unformatted");
            false
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            eprintln!("warning: {program} not found, skipping reformat");
            false
        }
        Err(e) => {
            eprintln!("warning: failed to run {program}: {e}");
            false
        }
    }
}
