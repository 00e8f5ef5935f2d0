use serde::Serialize;
use std::fmt;

// 출력되는 분포 종류
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    ReadIat,
    WriteIat,
    ReadAfterWrite,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::ReadIat,
        DistributionKind::WriteIat,
        DistributionKind::ReadAfterWrite,
    ];

    /// 출력 파일 이름에 붙는 접미사
    pub fn suffix(&self) -> &'static str {
        match self {
            DistributionKind::ReadIat => "_read_iat_cdf",
            DistributionKind::WriteIat => "_write_iat_cdf",
            DistributionKind::ReadAfterWrite => "_raw_cdf",
        }
    }

    // 표시 이름 반환
    pub fn display_name(&self) -> &'static str {
        match self {
            DistributionKind::ReadIat => "Read IAT",
            DistributionKind::WriteIat => "Write IAT",
            DistributionKind::ReadAfterWrite => "Read-after-write",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
