use serde::Serialize;

use crate::utils::constants::{DEFAULT_READ_TOKEN, DEFAULT_WRITE_TOKEN};

/// 요청 종류. 읽기/쓰기 이외의 토큰은 모두 `Other`로 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Write,
    Other,
}

/// 읽기/쓰기로 인식할 operation 토큰
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OperationTokens {
    pub read: String,
    pub write: String,
}

impl Default for OperationTokens {
    fn default() -> Self {
        Self {
            read: DEFAULT_READ_TOKEN.to_string(),
            write: DEFAULT_WRITE_TOKEN.to_string(),
        }
    }
}

impl OperationTokens {
    pub fn classify(&self, token: &str) -> Operation {
        if token == self.read {
            Operation::Read
        } else if token == self.write {
            Operation::Write
        } else {
            Operation::Other
        }
    }
}

/// A single access from an object store trace, kept in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub timestamp: u64,
    pub operation: Operation,
    pub key: Box<str>,
}

impl TraceRecord {
    pub fn new(timestamp: u64, operation: Operation, key: &str) -> Self {
        Self {
            timestamp,
            operation,
            key: key.into(),
        }
    }

    pub fn is_read(&self) -> bool {
        self.operation == Operation::Read
    }

    pub fn is_write(&self) -> bool {
        self.operation == Operation::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_tokens() {
        let tokens = OperationTokens::default();
        assert_eq!(tokens.classify("REST.GET.OBJECT"), Operation::Read);
        assert_eq!(tokens.classify("REST.PUT.OBJECT"), Operation::Write);
        assert_eq!(tokens.classify("REST.HEAD.OBJECT"), Operation::Other);
        // 대소문자는 구분
        assert_eq!(tokens.classify("rest.get.object"), Operation::Other);
    }

    #[test]
    fn test_classify_custom_tokens() {
        let tokens = OperationTokens {
            read: "GET".to_string(),
            write: "PUT".to_string(),
        };
        assert_eq!(tokens.classify("GET"), Operation::Read);
        assert_eq!(tokens.classify("PUT"), Operation::Write);
        assert_eq!(tokens.classify("REST.GET.OBJECT"), Operation::Other);
    }
}
