use crate::models::{Operation, TraceRecord};
use std::collections::HashMap;

// 키별 상태: 아직 읽히지 않은 가장 최근 쓰기 시각
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingWrite {
    Unarmed,
    Armed(u64),
}

/// Time from each write to the first read of the same key that follows it.
///
/// Runs over the full, unfiltered trace. A write (re)arms its key, dropping
/// any earlier unmatched write; the next read on that key emits one sample
/// and disarms it. Other operations are ignored.
pub fn read_after_write_intervals(records: &[TraceRecord]) -> Vec<u64> {
    let mut pending: HashMap<&str, PendingWrite> = HashMap::new();
    let mut intervals = Vec::new();

    for record in records {
        match record.operation {
            Operation::Write => {
                pending.insert(&record.key, PendingWrite::Armed(record.timestamp));
            }
            Operation::Read => {
                if let Some(state) = pending.get_mut(&*record.key) {
                    if let PendingWrite::Armed(written_at) = *state {
                        intervals.push(record.timestamp.saturating_sub(written_at));
                        *state = PendingWrite::Unarmed;
                    }
                }
            }
            Operation::Other => {}
        }
    }

    intervals
}
