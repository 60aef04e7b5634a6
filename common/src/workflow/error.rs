use std::fmt;

use thiserror::Error;

use crate::i18n::{Language, Text};

/// Which relay call an HTTP failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Submit,
    Status,
    Download,
}

impl RequestKind {
    fn text(self) -> Text {
        match self {
            RequestKind::Submit => Text::ErrorSubmit,
            RequestKind::Status => Text::ErrorStatus,
            RequestKind::Download => Text::ErrorDownload,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestKind::Submit => "API request",
            RequestKind::Status => "Status check",
            RequestKind::Download => "Download",
        })
    }
}

/// Everything that can end a generation attempt early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("at most 5 images can be submitted")]
    TooManyImages,
    #[error("{kind} failed: {details}")]
    Network { kind: RequestKind, details: String },
    #[error("{kind} failed with status {status}: {details}")]
    Http {
        kind: RequestKind,
        status: u16,
        details: String,
    },
    #[error("unexpected response: {0}")]
    Malformed(String),
    #[error("no jobs found in status response")]
    NoJobs,
    #[error("generation task failed ({} sub-jobs failed)", .failed.len())]
    GenerationFailed { failed: Vec<String> },
    #[error("download error: {0}")]
    DownloadRejected(String),
    #[error("no files available for download")]
    NoFiles,
    #[error("no {extension} file found in the results")]
    NoMatchingFile { extension: String },
    #[error("gave up after {attempts} status checks")]
    TimedOut { attempts: u32 },
    #[error("superseded by a newer submission")]
    Superseded,
}

impl WorkflowError {
    pub fn is_superseded(&self) -> bool {
        matches!(self, WorkflowError::Superseded)
    }

    /// Translated message shown to the user. Remote details are appended
    /// verbatim after the translated prefix.
    pub fn display(&self, language: Language) -> String {
        let t = |text: Text| text.in_language(language).to_string();
        match self {
            WorkflowError::TooManyImages => t(Text::FormMaxImages),
            WorkflowError::Network { kind, details } => {
                format!("{}: {} ({})", t(kind.text()), t(Text::ErrorNetwork), details)
            }
            WorkflowError::Http { kind, details, .. } => format!("{}: {}", t(kind.text()), details),
            WorkflowError::Malformed(details) => format!("{}: {}", t(Text::ErrorUnexpected), details),
            WorkflowError::NoJobs => t(Text::ErrorNoJobs),
            WorkflowError::GenerationFailed { .. } => t(Text::ErrorGeneration),
            WorkflowError::DownloadRejected(details) => format!("{}: {}", t(Text::ErrorDownload), details),
            WorkflowError::NoFiles => t(Text::ErrorNoFiles),
            WorkflowError::NoMatchingFile { .. } => t(Text::ErrorNoGlb),
            WorkflowError::TimedOut { .. } => t(Text::ErrorTimeout),
            WorkflowError::Superseded => String::new(),
        }
    }
}
