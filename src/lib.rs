pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod processors;
pub mod utils;

// 주요 기능 재내보내기(re-exporting)
pub use config::{AnalysisConfig, Cli, LoaderKind};
pub use error::{Result, TraceError};
pub use models::{DistributionKind, Operation, OperationTokens, TraceRecord};
pub use output::{ResultWriter, SkipReason, WriteOutcome, WriteReport};
pub use parsers::{parse_trace_file, parse_trace_file_high_perf};
pub use processors::{
    analyze_trace, inter_arrival_times, read_after_write_intervals, run_analysis, EmpiricalCdf,
    TraceAnalysis,
};
