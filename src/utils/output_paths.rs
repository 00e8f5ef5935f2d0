use crate::models::DistributionKind;
use crate::utils::constants::FALLBACK_IDENTIFIER;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 입력 파일 이름에서 출력 파일 식별자를 만든다.
///
/// `IBMObjectStoreTrace000Part0` 처럼 마커가 들어있으면 마커 뒤의 부분
/// (`000Part0`)을, 없으면 확장자를 뗀 파일 이름을 사용한다. `.gz`는 먼저 제거.
pub fn derive_identifier(input: &Path, marker: &str) -> String {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = file_name.strip_suffix(".gz").unwrap_or(&file_name);

    let identifier = if !marker.is_empty() && file_name.contains(marker) {
        // 마커 사이의 첫 구간
        file_name.split(marker).nth(1).unwrap_or_default().to_string()
    } else {
        Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    if identifier.is_empty() {
        FALLBACK_IDENTIFIER.to_string()
    } else {
        identifier
    }
}

/// Output file layout for one run: `<dir>/<identifier><suffix>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    dir: PathBuf,
    identifier: String,
}

impl OutputPaths {
    pub fn new(dir: impl Into<PathBuf>, identifier: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            identifier: identifier.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// 출력 디렉토리 생성 (이미 있으면 아무것도 하지 않음)
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    pub fn cdf_csv(&self, kind: DistributionKind) -> PathBuf {
        self.file(kind.suffix(), "csv")
    }

    pub fn cdf_plot(&self, kind: DistributionKind) -> PathBuf {
        self.file(kind.suffix(), "png")
    }

    pub fn summary(&self) -> PathBuf {
        self.file("_summary", "json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.file("_result", "log")
    }

    fn file(&self, suffix: &str, extension: &str) -> PathBuf {
        self.dir
            .join(format!("{}{}.{}", self.identifier, suffix, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "IBMObjectStoreTrace";

    #[test]
    fn test_identifier_after_marker() {
        assert_eq!(
            derive_identifier(Path::new("traces/IBMObjectStoreTrace000Part0"), MARKER),
            "000Part0"
        );
        assert_eq!(
            derive_identifier(Path::new("IBMObjectStoreTrace012Part3.gz"), MARKER),
            "012Part3"
        );
    }

    #[test]
    fn test_identifier_without_marker() {
        assert_eq!(derive_identifier(Path::new("/tmp/access.log"), MARKER), "access");
        assert_eq!(derive_identifier(Path::new("/tmp/access.log.gz"), MARKER), "access");
        assert_eq!(derive_identifier(Path::new("sample"), ""), "sample");
    }

    #[test]
    fn test_identifier_fallback() {
        assert_eq!(derive_identifier(Path::new("IBMObjectStoreTrace"), MARKER), "trace");
        assert_eq!(derive_identifier(Path::new("/"), MARKER), "trace");
    }

    #[test]
    fn test_output_file_names() {
        let paths = OutputPaths::new("./data", "000Part0");
        assert_eq!(
            paths.cdf_csv(DistributionKind::ReadIat),
            Path::new("./data/000Part0_read_iat_cdf.csv")
        );
        assert_eq!(
            paths.cdf_csv(DistributionKind::ReadAfterWrite),
            Path::new("./data/000Part0_raw_cdf.csv")
        );
        assert_eq!(
            paths.cdf_plot(DistributionKind::WriteIat),
            Path::new("./data/000Part0_write_iat_cdf.png")
        );
        assert_eq!(paths.summary(), Path::new("./data/000Part0_summary.json"));
        assert_eq!(paths.log_file(), Path::new("./data/000Part0_result.log"));
    }
}
