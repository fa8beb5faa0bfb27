//! Synchronous invocation of netsh command lines.
//!
//! netsh reports many failures on stdout rather than through its exit code,
//! so the outcome of a call is classified from the captured text: output
//! containing the word "error" together with a colon is treated as an
//! in-band failure report, and anything written to stderr is a failure.
//! The exit status is logged but not consulted.

use anyhow::{Context, Result};
use std::process::Command;
use tracing::debug;

use crate::error::WinWlanError;

/// Run a fully-formed command line through the platform shell and return
/// its decoded stdout with `\r\n` normalized to `\n`.
///
/// Blocks until the process exits. No retries, no timeout: a hung tool
/// blocks the caller.
pub fn run(cmd: &str) -> Result<String> {
    debug!("invoking: {}", cmd);

    let output = shell(cmd)
        .output()
        .with_context(|| format!("Failed to spawn shell for: {}", cmd))?;

    let stdout = String::from_utf8_lossy(&output.stdout).replace("\r\n", "\n");
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    debug!("exit status: {}", output.status);
    debug!("output: {}", stdout);

    classify(&stdout, &stderr)?;
    Ok(stdout)
}

#[cfg(windows)]
fn shell(cmd: &str) -> Command {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x08000000;
    let mut shell = Command::new("cmd");
    shell.args(["/C", cmd]).creation_flags(CREATE_NO_WINDOW);
    shell
}

#[cfg(not(windows))]
fn shell(cmd: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.args(["-c", cmd]);
    shell
}

/// Classify a finished call from its captured streams.
///
/// The in-band stdout heuristic is checked first, then stderr. Anything
/// else is success.
pub fn classify(stdout: &str, stderr: &str) -> Result<(), WinWlanError> {
    if stdout.to_lowercase().contains("error") && stdout.contains(':') {
        return Err(WinWlanError::ExternalTool(stdout.trim().to_string()));
    }
    if !stderr.is_empty() {
        return Err(WinWlanError::ExternalTool(stderr.trim().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inband_error_with_colon_is_rejected() {
        let stdout = "The Wireless AutoConfig Service is not running.\n\
                      Error: the service cannot be started\n";
        let err = classify(stdout, "").unwrap_err();
        assert!(matches!(err, WinWlanError::ExternalTool(_)));
    }

    #[test]
    fn error_word_alone_is_not_enough() {
        // "error" without any colon anywhere does not trip the heuristic.
        assert!(classify("an error occurred somewhere", "").is_ok());
    }

    #[test]
    fn informational_output_passes() {
        let help = "The following commands are available:\n\
                    \n\
                    Commands in this context:\n\
                    connect        - Connects to a wireless network.\n\
                    disconnect     - Disconnects from a wireless network.\n";
        assert!(classify(help, "").is_ok());
    }

    #[test]
    fn stderr_output_is_rejected() {
        let err = classify("", "netsh: command not found\n").unwrap_err();
        assert!(matches!(err, WinWlanError::ExternalTool(_)));
    }

    #[test]
    fn run_returns_decoded_stdout() {
        // echo goes through the same shell path netsh does.
        let out = run("echo hello").unwrap();
        assert_eq!(out.trim(), "hello");
    }
}
