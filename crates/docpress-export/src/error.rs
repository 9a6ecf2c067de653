use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{tool} is not installed or not in PATH.")]
    MissingTool { tool: String },

    #[error("No valid Markdown files found.")]
    NoValidInputs,

    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// `code` is `None` when the tool was terminated by a signal.
    #[error("{tool} exited with {}", display_code(.code))]
    ToolFailed { tool: String, code: Option<i32> },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status to report for this error.
    ///
    /// A failed external tool propagates its own status. Everything else,
    /// including a tool killed by a signal, exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::ToolFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl From<printpdf::Error> for ExportError {
    fn from(e: printpdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}
