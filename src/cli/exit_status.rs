use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): extraction completed
/// - `Error` (2): missing input or internal error (fs failure, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Extraction completed.
    Success,
    /// Missing input or internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
