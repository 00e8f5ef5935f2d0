use crate::log;
use crate::utils::constants::{MAX_CHUNK_BYTES, MIN_CHUNK_BYTES};
use std::time::{Duration, Instant};

/// 단계별 소요 시간 기록
pub struct PerformanceProfiler {
    start_time: Instant,
    checkpoints: Vec<(String, Instant)>,
}

impl Default for PerformanceProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceProfiler {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            checkpoints: Vec::new(),
        }
    }

    pub fn checkpoint(&mut self, name: &str) {
        self.checkpoints.push((name.to_string(), Instant::now()));
    }

    pub fn print_profile(&self) {
        log!("\n=== Performance Profile ===");

        let mut last_time = self.start_time;

        for (name, time) in &self.checkpoints {
            let duration = time.duration_since(last_time);
            let total_duration = time.duration_since(self.start_time);

            log!(
                "{}: {:.3}s (total: {:.3}s)",
                name,
                duration.as_secs_f64(),
                total_duration.as_secs_f64()
            );

            last_time = *time;
        }
    }

    pub fn get_total_time(&self) -> Duration {
        if let Some((_, last_time)) = self.checkpoints.last() {
            last_time.duration_since(self.start_time)
        } else {
            Instant::now().duration_since(self.start_time)
        }
    }
}

/// mmap 로더가 한 번에 파싱할 청크 크기 계산
///
/// 코어당 4개 정도의 청크가 나오도록 나누고 `[MIN_CHUNK_BYTES, MAX_CHUNK_BYTES]`
/// 범위로 제한한다.
pub fn calculate_chunk_size(file_size: usize, cpu_count: usize) -> usize {
    let target_chunks = cpu_count.max(1) * 4;
    let suggested = file_size / target_chunks;
    suggested.clamp(MIN_CHUNK_BYTES, MAX_CHUNK_BYTES)
}
