//! Error types for the resume2pdf library.
//!
//! Every expected failure mode is a named [`ResumeError`] variant:
//!
//! * `MissingInput` — the source document does not exist.
//! * `Parse` — the source document is not structurally valid YAML for the
//!   resume shape; carries the parser's diagnostic.
//! * `Render` — the template or pagination engine failed on otherwise
//!   loaded data.
//! * `Write` — a destination path could not be written.
//!
//! The library never exits the process itself; the CLI (and the watch loop,
//! which reports per-iteration failures and keeps running) decide how each
//! variant is presented.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the resume2pdf library.
#[derive(Debug, Error)]
pub enum ResumeError {
    /// The source document was not found at the given path.
    #[error("resume file not found: '{path}'\nCreate it first, or pass a different path.")]
    MissingInput { path: PathBuf },

    /// The source document exists but is not valid for the resume shape.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Template rendering or pagination failed.
    #[error("render failed: {detail}")]
    Render { detail: String },

    /// Could not create or write an output artifact.
    #[error("failed to write output file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O operation other than writing an artifact failed: the source
    /// file exists but could not be read, or the runtime could not start.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The filesystem watch could not be established.
    #[error("file watch failed: {detail}")]
    Watch { detail: String },
}

impl From<handlebars::RenderError> for ResumeError {
    fn from(e: handlebars::RenderError) -> Self {
        ResumeError::Render {
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_display_names_the_path() {
        let e = ResumeError::MissingInput {
            path: PathBuf::from("resume.yaml"),
        };
        assert!(e.to_string().contains("resume.yaml"));
    }

    #[test]
    fn parse_error_carries_yaml_diagnostic() {
        let yaml_err = serde_yaml::from_str::<crate::model::Resume>(": bad").unwrap_err();
        let e = ResumeError::Parse {
            path: PathBuf::from("resume.yaml"),
            source: yaml_err,
        };
        let msg = e.to_string();
        assert!(msg.contains("resume.yaml"), "got: {msg}");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn io_error_display_keeps_context_and_source() {
        let e = ResumeError::Io {
            context: "failed to read 'resume.yaml'".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("resume.yaml"));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn write_error_display() {
        let e = ResumeError::Write {
            path: PathBuf::from("/nonexistent/resume.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.to_string().contains("resume.html"));
    }
}
