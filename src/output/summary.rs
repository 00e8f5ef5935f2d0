use crate::config::AnalysisConfig;
use crate::error::{Result, TraceError};
use crate::output::statistics::DistributionStatistics;
use crate::output::writer::WriteReport;
use crate::processors::{TraceAnalysis, TraceCounts};
use crate::utils::OutputPaths;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Machine-readable record of one run, written as `<id>_summary.json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub identifier: String,
    pub generated_at: String,
    pub config: AnalysisConfig,
    pub counts: TraceCounts,
    pub statistics: Vec<DistributionStatistics>,
    pub report: WriteReport,
}

impl RunSummary {
    pub fn new(
        input: &Path,
        paths: &OutputPaths,
        config: &AnalysisConfig,
        analysis: &TraceAnalysis,
        statistics: Vec<DistributionStatistics>,
        report: &WriteReport,
    ) -> Self {
        Self {
            input: input.to_path_buf(),
            identifier: paths.identifier().to_string(),
            generated_at: Local::now().to_rfc3339(),
            config: config.clone(),
            counts: analysis.counts.clone(),
            statistics,
            report: report.clone(),
        }
    }
}

pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| TraceError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary).map_err(|e| {
        // serde_json은 쓰기 실패도 자기 에러로 감쌈
        if e.is_io() {
            TraceError::io(path, e.into())
        } else {
            TraceError::Json(e)
        }
    })?;
    writer.flush().map_err(|e| TraceError::io(path, e))?;
    Ok(())
}
