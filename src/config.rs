//! Run configuration and the command-line surface that builds it.

use crate::models::OperationTokens;
use crate::utils::constants::{
    DEFAULT_IDENTIFIER_MARKER, DEFAULT_MIN_SAMPLES, DEFAULT_OUTPUT_DIR, DEFAULT_READ_TOKEN,
    DEFAULT_WRITE_TOKEN,
};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// 트레이스 로더 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderKind {
    /// Buffered line reader, gzip aware
    Buffered,
    /// Memory-mapped parallel loader
    Mmap,
}

/// Everything a single analysis run needs besides the input path.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
    pub output_dir: PathBuf,
    /// A distribution is written only when it has strictly more samples than this.
    pub min_samples: usize,
    pub tokens: OperationTokens,
    pub identifier_marker: String,
    pub loader: LoaderKind,
    pub write_summary: bool,
    pub write_plots: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_samples: DEFAULT_MIN_SAMPLES,
            tokens: OperationTokens::default(),
            identifier_marker: DEFAULT_IDENTIFIER_MARKER.to_string(),
            loader: LoaderKind::Buffered,
            write_summary: false,
            write_plots: false,
        }
    }
}

/// objtrace - temporal locality of object store access traces
#[derive(Parser, Debug)]
#[command(name = "objtrace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Trace file: `<timestamp> <operation> <key>` per line (plain or .gz)
    #[arg(value_name = "TRACE_FILE")]
    pub input: PathBuf,

    /// Directory for the CDF files (created if missing)
    #[arg(short = 'o', long, env = "OBJTRACE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Write a distribution only if it has more than this many samples
    #[arg(short = 'm', long, env = "OBJTRACE_MIN_SAMPLES", default_value_t = DEFAULT_MIN_SAMPLES)]
    pub min_samples: usize,

    /// Operation token counted as a read
    #[arg(long, default_value = DEFAULT_READ_TOKEN)]
    pub read_token: String,

    /// Operation token counted as a write
    #[arg(long, default_value = DEFAULT_WRITE_TOKEN)]
    pub write_token: String,

    /// Output files are named after the part of the input name following this marker
    #[arg(long, default_value = DEFAULT_IDENTIFIER_MARKER)]
    pub marker: String,

    /// Use the memory-mapped parallel loader
    #[arg(long)]
    pub highperf: bool,

    /// Also write `<id>_summary.json`
    #[arg(long)]
    pub summary: bool,

    /// Also write a PNG plot per CDF
    #[arg(long)]
    pub plot: bool,
}

impl Cli {
    pub fn into_parts(self) -> (PathBuf, AnalysisConfig) {
        let config = AnalysisConfig {
            output_dir: self.output_dir,
            min_samples: self.min_samples,
            tokens: OperationTokens {
                read: self.read_token,
                write: self.write_token,
            },
            identifier_marker: self.marker,
            loader: if self.highperf {
                LoaderKind::Mmap
            } else {
                LoaderKind::Buffered
            },
            write_summary: self.summary,
            write_plots: self.plot,
        };
        (self.input, config)
    }
}
