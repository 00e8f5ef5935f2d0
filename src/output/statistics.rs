use crate::log;
use crate::models::DistributionKind;
use crate::processors::TraceAnalysis;
use serde::Serialize;

// 분포별 요약 통계
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleStats {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    pub p90: u64,
    pub p99: u64,
}

impl SampleStats {
    /// 빈 샘플이면 None
    pub fn from_samples(samples: &[u64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        // 값을 복사하여 정렬
        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let sum: u128 = sorted.iter().map(|&v| v as u128).sum();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        };

        Some(Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean: sum as f64 / count as f64,
            median,
            p90: percentile(&sorted, 90.0),
            p99: percentile(&sorted, 99.0),
        })
    }
}

// (n-1) 구간에서 반올림한 인덱스 (정렬된 입력)
fn percentile(sorted: &[u64], p: f64) -> u64 {
    let idx = (p / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionStatistics {
    pub kind: DistributionKind,
    pub stats: Option<SampleStats>,
}

pub fn collect_statistics(analysis: &TraceAnalysis) -> Vec<DistributionStatistics> {
    DistributionKind::ALL
        .iter()
        .map(|&kind| DistributionStatistics {
            kind,
            stats: SampleStats::from_samples(analysis.samples(kind)),
        })
        .collect()
}

pub fn print_distribution_statistics(statistics: &[DistributionStatistics]) {
    log!("\n[Distribution statistics]");
    log!(
        "{:<18} {:>10} {:>12} {:>12} {:>14} {:>12} {:>12} {:>12}",
        "Distribution",
        "Count",
        "Min",
        "Max",
        "Mean",
        "Median",
        "P90",
        "P99"
    );

    for entry in statistics {
        match &entry.stats {
            Some(s) => log!(
                "{:<18} {:>10} {:>12} {:>12} {:>14.3} {:>12.1} {:>12} {:>12}",
                entry.kind.display_name(),
                s.count,
                s.min,
                s.max,
                s.mean,
                s.median,
                s.p90,
                s.p99
            ),
            None => log!("{:<18} {:>10}", entry.kind.display_name(), 0),
        }
    }
}
