use std::process::ExitCode;

/// Exit status for the generator.
///
/// - `Success` (0): every requested file was generated
/// - `Error` (2): nothing was written (missing input, parse error, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every requested file was generated.
    Success,
    /// The run failed and no output was written.
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
