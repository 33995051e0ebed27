use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, including dry runs and `--help`
/// - `Failure` (1): Usage error, configuration error or failed write
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command could not run or did not complete.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
