pub mod trace;
pub mod trace_common;
pub mod trace_mmap;

pub use trace::{parse_trace_file, parse_trace_reader};
pub use trace_common::{parse_trace_bytes, parse_trace_line};
pub use trace_mmap::{parse_trace_buffer, parse_trace_file_high_perf};
