// 기본 operation 토큰 (IBM Object Store 트레이스 형식)
pub const DEFAULT_READ_TOKEN: &str = "REST.GET.OBJECT";
pub const DEFAULT_WRITE_TOKEN: &str = "REST.PUT.OBJECT";

// 입력 파일 이름에서 식별자를 잘라낼 때 사용하는 마커
pub const DEFAULT_IDENTIFIER_MARKER: &str = "IBMObjectStoreTrace";

// 식별자를 얻지 못했을 때 사용하는 이름
pub const FALLBACK_IDENTIFIER: &str = "trace";

pub const DEFAULT_OUTPUT_DIR: &str = "./data";

// 분포별 최소 샘플 수 (이 값보다 커야 파일을 저장)
pub const DEFAULT_MIN_SAMPLES: usize = 5;

// 이 크기 이상이면 병렬 정렬 사용
pub const PARALLEL_SORT_THRESHOLD: usize = 1 << 16;

// mmap 로더 청크 크기 하한/상한
pub const MIN_CHUNK_BYTES: usize = 1024 * 1024;
pub const MAX_CHUNK_BYTES: usize = 64 * 1024 * 1024;
