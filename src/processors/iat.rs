use crate::models::TraceRecord;
use std::collections::HashMap;

/// Per-record inter-arrival time within one already-filtered stream.
///
/// Each output lines up with its input record: `Some(t - last_seen[key])`
/// when the key appeared earlier in this stream, `None` for its first
/// occurrence. The last-seen table lives only for this call.
///
/// A timestamp that goes backwards for a key yields `Some(0)`; use
/// [`count_regressions`] to detect that.
pub fn inter_arrival_times<'a, I>(records: I) -> Vec<Option<u64>>
where
    I: IntoIterator<Item = &'a TraceRecord>,
{
    let records = records.into_iter();
    let mut last_seen: HashMap<&'a str, u64> = HashMap::with_capacity(records.size_hint().0 / 4);

    records
        .map(|record| {
            let previous = last_seen.insert(&record.key, record.timestamp);
            previous.map(|prev| record.timestamp.saturating_sub(prev))
        })
        .collect()
}

/// `inter_arrival_times` without the first-occurrence sentinels.
pub fn inter_arrival_samples<'a, I>(records: I) -> Vec<u64>
where
    I: IntoIterator<Item = &'a TraceRecord>,
{
    inter_arrival_times(records).into_iter().flatten().collect()
}

/// 같은 키에서 timestamp가 감소한 횟수
pub fn count_regressions<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a TraceRecord>,
{
    let mut last_seen: HashMap<&'a str, u64> = HashMap::new();
    records
        .into_iter()
        .filter(|record| {
            let previous = last_seen.insert(&record.key, record.timestamp);
            matches!(previous, Some(prev) if record.timestamp < prev)
        })
        .count()
}
