use crate::config::{AnalysisConfig, LoaderKind};
use crate::error::{Result, TraceError};
use crate::models::{DistributionKind, Operation, TraceRecord};
use crate::output::{
    collect_statistics, print_distribution_statistics, write_summary, ResultWriter, RunSummary,
    WriteReport,
};
use crate::parsers::trace_common::is_gzip_path;
use crate::parsers::{parse_trace_file, parse_trace_file_high_perf};
use crate::processors::iat::{count_regressions, inter_arrival_samples};
use crate::processors::read_after_write::read_after_write_intervals;
use crate::utils::{derive_identifier, OutputPaths, PerformanceProfiler};
use crate::{log, log_error};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Record counts gathered while analysing one trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraceCounts {
    pub records: usize,
    pub reads: usize,
    pub writes: usize,
    pub others: usize,
    /// 같은 키에서 timestamp가 감소한 횟수 (0으로 clamp됨)
    pub read_regressions: usize,
    pub write_regressions: usize,
}

/// The three sample sets derived from one trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceAnalysis {
    pub counts: TraceCounts,
    pub read_iat: Vec<u64>,
    pub write_iat: Vec<u64>,
    pub read_after_write: Vec<u64>,
}

impl TraceAnalysis {
    pub fn samples(&self, kind: DistributionKind) -> &[u64] {
        match kind {
            DistributionKind::ReadIat => &self.read_iat,
            DistributionKind::WriteIat => &self.write_iat,
            DistributionKind::ReadAfterWrite => &self.read_after_write,
        }
    }
}

pub fn analyze_trace(records: &[TraceRecord]) -> TraceAnalysis {
    let start_time = std::time::Instant::now();
    log!("Analyzing {} trace records...", records.len());

    let mut counts = TraceCounts {
        records: records.len(),
        ..Default::default()
    };
    for record in records {
        match record.operation {
            Operation::Read => counts.reads += 1,
            Operation::Write => counts.writes += 1,
            Operation::Other => counts.others += 1,
        }
    }

    // 읽기/쓰기 각각 독립된 테이블로 계산
    let reads = || records.iter().filter(|r| r.is_read());
    let writes = || records.iter().filter(|r| r.is_write());

    let read_iat = inter_arrival_samples(reads());
    let write_iat = inter_arrival_samples(writes());
    counts.read_regressions = count_regressions(reads());
    counts.write_regressions = count_regressions(writes());

    // read-after-write는 필터링하지 않은 전체 트레이스에서 계산
    let read_after_write = read_after_write_intervals(records);

    if counts.read_regressions + counts.write_regressions > 0 {
        log!(
            "  Warning: timestamps went backwards {} times (read) / {} times (write); those intervals were clamped to 0",
            counts.read_regressions,
            counts.write_regressions
        );
    }

    log!(
        "  {} reads, {} writes, {} other | samples: read IAT {}, write IAT {}, read-after-write {} ({:.2}s)",
        counts.reads,
        counts.writes,
        counts.others,
        read_iat.len(),
        write_iat.len(),
        read_after_write.len(),
        start_time.elapsed().as_secs_f64()
    );

    TraceAnalysis {
        counts,
        read_iat,
        write_iat,
        read_after_write,
    }
}

/// Load the trace with the configured loader.
pub fn load_trace(input: &Path, config: &AnalysisConfig) -> Result<Vec<TraceRecord>> {
    match config.loader {
        LoaderKind::Mmap if is_gzip_path(input) => {
            log!("  gzip input cannot be memory-mapped, falling back to the buffered loader");
            parse_trace_file(input, &config.tokens)
        }
        LoaderKind::Mmap => parse_trace_file_high_perf(input, &config.tokens),
        LoaderKind::Buffered => parse_trace_file(input, &config.tokens),
    }
}

pub fn output_paths_for(input: &Path, config: &AnalysisConfig) -> OutputPaths {
    OutputPaths::new(
        &config.output_dir,
        derive_identifier(input, &config.identifier_marker),
    )
}

/// Outcome of [`run_analysis`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub paths: OutputPaths,
    pub analysis: TraceAnalysis,
    pub report: WriteReport,
    pub summary_path: Option<PathBuf>,
}

/// Load, analyse and persist one trace file.
///
/// Parsing finishes before anything is written, so a malformed trace leaves
/// the output directory untouched.
pub fn run_analysis(input: &Path, config: &AnalysisConfig) -> Result<RunOutcome> {
    let records = load_trace(input, config)?;
    process_records(input, records, config)
}

/// Analyse already-loaded records and persist the results for `input`.
pub fn process_records(input: &Path, records: Vec<TraceRecord>, config: &AnalysisConfig) -> Result<RunOutcome> {
    let mut profiler = PerformanceProfiler::new();
    let paths = output_paths_for(input, config);

    let analysis = analyze_trace(&records);
    drop(records);
    profiler.checkpoint("Distributions computed");

    let statistics = collect_statistics(&analysis);
    print_distribution_statistics(&statistics);

    let writer = ResultWriter::new(paths.clone(), config.min_samples).with_plots(config.write_plots);
    let report = writer.write_all(&analysis)?;
    profiler.checkpoint("Results written");

    let summary_path = if config.write_summary {
        let summary = RunSummary::new(input, &paths, config, &analysis, statistics, &report);
        let path = paths.summary();
        match write_summary(&summary, &path) {
            Ok(()) => {
                log!("Summary saved to {}", path.display());
                Some(path)
            }
            // 직렬화 실패만 무시하고 I/O 실패는 전파
            Err(TraceError::Json(e)) if !e.is_io() => {
                log_error!("Failed to serialize summary: {}", e);
                None
            }
            Err(e) => return Err(e),
        }
    } else {
        None
    };

    profiler.print_profile();

    Ok(RunOutcome {
        paths,
        analysis,
        report,
        summary_path,
    })
}
