use crate::error::{Result, TraceError};
use crate::log;
use crate::models::{OperationTokens, TraceRecord};
use crate::parsers::trace_common::{is_gzip_path, parse_trace_bytes};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

const READ_BUFFER_SIZE: usize = 1 << 20;

/// Load a whole trace file into memory, in file order.
///
/// Files ending in `.gz` are decompressed on the fly.
pub fn parse_trace_file(filepath: &Path, tokens: &OperationTokens) -> Result<Vec<TraceRecord>> {
    let start_time = Instant::now();
    log!("Parsing trace file: {}", filepath.display());

    let file = File::open(filepath).map_err(|e| TraceError::io(filepath, e))?;
    let reader: Box<dyn Read> = if is_gzip_path(filepath) {
        log!("  gzip input detected, decompressing while reading");
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let records = parse_trace_reader(
        BufReader::with_capacity(READ_BUFFER_SIZE, reader),
        filepath,
        tokens,
    )?;

    log!(
        "Parsed {} records in {:.2}s",
        records.len(),
        start_time.elapsed().as_secs_f64()
    );
    Ok(records)
}

/// 임의의 reader에서 레코드를 읽는다. `source`는 에러 메시지용 경로
pub fn parse_trace_reader<R: BufRead>(
    mut reader: R,
    source: &Path,
    tokens: &OperationTokens,
) -> Result<Vec<TraceRecord>> {
    let mut records = Vec::new();
    let mut buf = Vec::with_capacity(256);
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| TraceError::io(source, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        records.push(parse_trace_bytes(line, line_no, tokens)?);
    }

    Ok(records)
}
