use crate::error::{Result, TraceError};
use crate::models::DistributionKind;
use crate::output::csv::save_cdf_to_csv;
use crate::output::plot::plot_cdf;
use crate::processors::{EmpiricalCdf, TraceAnalysis};
use crate::utils::OutputPaths;
use crate::{log, log_error};
use serde::Serialize;
use std::path::PathBuf;

/// Why a distribution was not written. Neither case is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// `count <= threshold`
    InsufficientSamples { count: usize, threshold: usize },
    /// 모든 샘플이 0이면 정규화할 수 없음
    Degenerate { count: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteOutcome {
    Written { path: PathBuf, rows: usize },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionOutcome {
    pub kind: DistributionKind,
    pub sample_count: usize,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WriteReport {
    pub outcomes: Vec<DistributionOutcome>,
}

impl WriteReport {
    pub fn written(&self) -> impl Iterator<Item = (DistributionKind, &PathBuf)> + '_ {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            WriteOutcome::Written { path, .. } => Some((o.kind, path)),
            WriteOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (DistributionKind, &SkipReason)> + '_ {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            WriteOutcome::Skipped(reason) => Some((o.kind, reason)),
            WriteOutcome::Written { .. } => None,
        })
    }

    pub fn outcome(&self, kind: DistributionKind) -> Option<&WriteOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.kind == kind)
            .map(|o| &o.outcome)
    }
}

/// Gates each distribution on its sample count and persists the survivors.
///
/// Gating is per distribution: a distribution is written when it has strictly
/// more than `min_samples` samples, independently of the others.
pub struct ResultWriter {
    paths: OutputPaths,
    min_samples: usize,
    plots: bool,
}

impl ResultWriter {
    pub fn new(paths: OutputPaths, min_samples: usize) -> Self {
        Self {
            paths,
            min_samples,
            plots: false,
        }
    }

    pub fn with_plots(mut self, plots: bool) -> Self {
        self.plots = plots;
        self
    }

    pub fn write_all(&self, analysis: &TraceAnalysis) -> Result<WriteReport> {
        self.paths
            .ensure_dir()
            .map_err(|e| TraceError::io(self.paths.dir(), e))?;

        let mut report = WriteReport::default();
        for kind in DistributionKind::ALL {
            let samples = analysis.samples(kind);
            let outcome = self.write_one(kind, samples)?;
            report.outcomes.push(DistributionOutcome {
                kind,
                sample_count: samples.len(),
                outcome,
            });
        }

        Ok(report)
    }

    fn write_one(&self, kind: DistributionKind, samples: &[u64]) -> Result<WriteOutcome> {
        if samples.len() <= self.min_samples {
            log!(
                "{}: only {} samples (need more than {}), not saved",
                kind,
                samples.len(),
                self.min_samples
            );
            return Ok(WriteOutcome::Skipped(SkipReason::InsufficientSamples {
                count: samples.len(),
                threshold: self.min_samples,
            }));
        }

        let cdf = match EmpiricalCdf::from_samples(samples.to_vec()) {
            Ok(cdf) => cdf,
            Err(TraceError::DegenerateSamples { count }) => {
                log!("{}: all {} samples are zero, not saved", kind, count);
                return Ok(WriteOutcome::Skipped(SkipReason::Degenerate { count }));
            }
            Err(e) => return Err(e),
        };

        let path = self.paths.cdf_csv(kind);
        save_cdf_to_csv(&cdf, &path)?;
        log!("{} CDF saved to {} ({} rows)", kind, path.display(), cdf.len());

        if self.plots {
            let plot_path = self.paths.cdf_plot(kind);
            match plot_cdf(&cdf, kind, &plot_path) {
                Ok(()) => log!("{} CDF plot saved to {}", kind, plot_path.display()),
                Err(e) => log_error!("Error generating {} CDF plot: {}", kind, e),
            }
        }

        Ok(WriteOutcome::Written {
            path,
            rows: cdf.len(),
        })
    }
}
