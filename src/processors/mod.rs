pub mod cdf;
pub mod iat;
pub mod pipeline;
pub mod read_after_write;

pub use cdf::EmpiricalCdf;
pub use iat::{count_regressions, inter_arrival_samples, inter_arrival_times};
pub use pipeline::{
    analyze_trace, load_trace, output_paths_for, process_records, run_analysis, RunOutcome,
    TraceAnalysis, TraceCounts,
};
pub use read_after_write::read_after_write_intervals;
