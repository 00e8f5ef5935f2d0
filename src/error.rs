use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading a trace or building its distributions.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Malformed trace line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot build a CDF from an empty sample set")]
    EmptySamples,

    #[error("All {count} samples are zero; the CDF is undefined")]
    DegenerateSamples { count: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TraceError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        TraceError::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TraceError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;
