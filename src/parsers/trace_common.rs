// Line-level parsing shared by the buffered and memory-mapped loaders

use crate::error::{Result, TraceError};
use crate::models::{OperationTokens, TraceRecord};
use std::path::Path;

/// `<timestamp> <operation> <key>` 한 줄을 파싱한다. `line_no`는 1부터 시작.
///
/// 필드가 3개보다 적거나 timestamp가 음이 아닌 정수가 아니면 에러.
/// 네 번째 이후 필드는 무시한다.
pub fn parse_trace_line(line: &str, line_no: usize, tokens: &OperationTokens) -> Result<TraceRecord> {
    let mut fields = line.split_whitespace();
    let (Some(timestamp), Some(operation), Some(key)) = (fields.next(), fields.next(), fields.next())
    else {
        let found = line.split_whitespace().count();
        return Err(TraceError::malformed(
            line_no,
            format!("expected 3 fields, found {found}"),
        ));
    };

    let timestamp = timestamp.parse::<u64>().map_err(|_| {
        TraceError::malformed(
            line_no,
            format!("timestamp '{timestamp}' is not a non-negative integer"),
        )
    })?;

    Ok(TraceRecord::new(timestamp, tokens.classify(operation), key))
}

/// 바이트 슬라이스 버전. UTF-8이 아니면 malformed로 처리
pub fn parse_trace_bytes(line: &[u8], line_no: usize, tokens: &OperationTokens) -> Result<TraceRecord> {
    let line = std::str::from_utf8(line)
        .map_err(|_| TraceError::malformed(line_no, "line is not valid UTF-8"))?;
    parse_trace_line(line, line_no, tokens)
}

pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;

    #[test]
    fn test_parse_valid_line() {
        let tokens = OperationTokens::default();
        let record = parse_trace_line("1219008 REST.PUT.OBJECT 8d4fcda3d675bac9 1056", 1, &tokens).unwrap();
        assert_eq!(record.timestamp, 1219008);
        assert_eq!(record.operation, Operation::Write);
        assert_eq!(&*record.key, "8d4fcda3d675bac9");
    }

    #[test]
    fn test_parse_other_operation() {
        let tokens = OperationTokens::default();
        let record = parse_trace_line("7\tREST.HEAD.OBJECT\tk\r", 1, &tokens).unwrap();
        assert_eq!(record.operation, Operation::Other);
        assert_eq!(&*record.key, "k");
    }

    #[test]
    fn test_missing_fields() {
        let tokens = OperationTokens::default();
        let err = parse_trace_line("10 REST.GET.OBJECT", 4, &tokens).unwrap_err();
        match err {
            TraceError::MalformedLine { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("found 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_trace_line("", 1, &tokens).is_err());
    }

    #[test]
    fn test_bad_timestamp() {
        let tokens = OperationTokens::default();
        assert!(parse_trace_line("1.5 REST.GET.OBJECT a", 1, &tokens).is_err());
        assert!(parse_trace_line("-3 REST.GET.OBJECT a", 1, &tokens).is_err());
        assert!(parse_trace_line("abc REST.GET.OBJECT a", 1, &tokens).is_err());
    }

    #[test]
    fn test_invalid_utf8() {
        let tokens = OperationTokens::default();
        let err = parse_trace_bytes(b"1 REST.GET.OBJECT \xff\xfe", 9, &tokens).unwrap_err();
        assert!(matches!(err, TraceError::MalformedLine { line: 9, .. }));
    }

    #[test]
    fn test_gzip_detection() {
        assert!(is_gzip_path(Path::new("IBMObjectStoreTrace000Part0.gz")));
        assert!(is_gzip_path(Path::new("trace.GZ")));
        assert!(!is_gzip_path(Path::new("IBMObjectStoreTrace000Part0")));
    }
}
