use crate::error::{Result, TraceError};
use crate::utils::constants::PARALLEL_SORT_THRESHOLD;
use rayon::prelude::*;
use serde::Serialize;

/// Value-weighted cumulative distribution of a sample set.
///
/// `x` holds the samples in ascending order and `y[i]` is the sum of
/// `x[0..=i]` divided by the sum of all samples. This is not the rank-based
/// `i / n` CDF; output files depend on this exact definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmpiricalCdf {
    pub x: Vec<u64>,
    pub y: Vec<f64>,
}

impl EmpiricalCdf {
    pub fn from_samples(mut samples: Vec<u64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(TraceError::EmptySamples);
        }

        if samples.len() >= PARALLEL_SORT_THRESHOLD {
            samples.par_sort_unstable();
        } else {
            samples.sort_unstable();
        }

        // u64 합이 넘칠 수 있으므로 u128로 누적
        let total: u128 = samples.iter().map(|&v| v as u128).sum();
        if total == 0 {
            return Err(TraceError::DegenerateSamples {
                count: samples.len(),
            });
        }

        let total = total as f64;
        let mut running: u128 = 0;
        let y = samples
            .iter()
            .map(|&v| {
                running += v as u128;
                running as f64 / total
            })
            .collect();

        Ok(Self { x: samples, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (x, y) 행 순회
    pub fn rows(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
