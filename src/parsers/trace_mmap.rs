// High-performance memory-mapped trace loader

use crate::error::{Result, TraceError};
use crate::log;
use crate::models::{OperationTokens, TraceRecord};
use crate::parsers::trace_common::parse_trace_bytes;
use crate::utils::{calculate_chunk_size, PerformanceProfiler};
use memchr::{memchr, memchr_iter};
use memmap2::MmapOptions;
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;

/// A byte range of the mapped file plus the 1-based number of its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Chunk {
    start: usize,
    end: usize,
    first_line: usize,
}

// 라인을 자르지 않도록 청크 경계를 개행 다음 위치로 맞춤
fn split_chunks(data: &[u8], chunk_size: usize) -> Vec<(usize, usize)> {
    let mut boundaries = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let tentative = (pos + chunk_size.max(1)).min(data.len());
        let end = if tentative < data.len() {
            match memchr(b'\n', &data[tentative - 1..]) {
                Some(offset) => tentative + offset,
                None => data.len(),
            }
        } else {
            tentative
        };
        boundaries.push((pos, end));
        pos = end;
    }

    boundaries
}

// 각 청크의 시작 라인 번호 계산 (개행 개수 누적)
fn number_chunks(data: &[u8], ranges: &[(usize, usize)]) -> Vec<Chunk> {
    let newline_counts: Vec<usize> = ranges
        .par_iter()
        .map(|&(start, end)| memchr_iter(b'\n', &data[start..end]).count())
        .collect();

    let mut first_line = 1;
    ranges
        .iter()
        .zip(newline_counts)
        .map(|(&(start, end), newlines)| {
            let chunk = Chunk {
                start,
                end,
                first_line,
            };
            first_line += newlines;
            chunk
        })
        .collect()
}

fn parse_chunk(data: &[u8], chunk: Chunk, tokens: &OperationTokens) -> Result<Vec<TraceRecord>> {
    let bytes = &data[chunk.start..chunk.end];
    let mut records = Vec::with_capacity(bytes.len() / 48);
    let mut line_no = chunk.first_line;
    let mut line_start = 0;

    for line_end in memchr_iter(b'\n', bytes) {
        records.push(parse_trace_bytes(&bytes[line_start..line_end], line_no, tokens)?);
        line_no += 1;
        line_start = line_end + 1;
    }
    // 마지막 줄에 개행이 없는 경우
    if line_start < bytes.len() {
        records.push(parse_trace_bytes(&bytes[line_start..], line_no, tokens)?);
    }

    Ok(records)
}

/// Parse an in-memory trace buffer in parallel chunks, keeping file order.
pub fn parse_trace_buffer(data: &[u8], chunk_size: usize, tokens: &OperationTokens) -> Result<Vec<TraceRecord>> {
    let chunks = number_chunks(data, &split_chunks(data, chunk_size));

    // rayon의 collect는 입력 순서를 유지
    let results: Vec<Result<Vec<TraceRecord>>> = chunks
        .par_iter()
        .map(|&chunk| parse_chunk(data, chunk, tokens))
        .collect();

    let total = results
        .iter()
        .map(|r| r.as_ref().map_or(0, |v| v.len()))
        .sum::<usize>();
    let mut records = Vec::with_capacity(total);
    // 가장 앞선 청크의 에러를 반환
    for result in results {
        records.extend(result?);
    }

    Ok(records)
}

/// Memory-map the trace file and parse it on all cores.
pub fn parse_trace_file_high_perf(filepath: &Path, tokens: &OperationTokens) -> Result<Vec<TraceRecord>> {
    let mut profiler = PerformanceProfiler::new();
    log!("Starting high-performance trace parsing: {}", filepath.display());

    let file = File::open(filepath).map_err(|e| TraceError::io(filepath, e))?;
    let file_size = file
        .metadata()
        .map_err(|e| TraceError::io(filepath, e))?
        .len() as usize;
    log!("File size: {:.2} MB", file_size as f64 / (1024.0 * 1024.0));

    // 빈 파일은 mmap 할 수 없음
    if file_size == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| TraceError::io(filepath, e))?;
    profiler.checkpoint("File memory-mapped");

    let cpu_count = num_cpus::get();
    let chunk_size = calculate_chunk_size(file_size, cpu_count);
    log!(
        "Using {} CPU cores with chunk size: {:.2} MB",
        cpu_count,
        chunk_size as f64 / 1_048_576.0
    );

    let records = parse_trace_buffer(&mmap, chunk_size, tokens)?;
    profiler.checkpoint("Chunks parsed");

    log!(
        "High-performance parsing completed: {} records in {:.2}s",
        records.len(),
        profiler.get_total_time().as_secs_f64()
    );
    Ok(records)
}
