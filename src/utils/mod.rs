pub mod constants;
pub mod logger;
pub mod output_paths;
pub mod profiler;

pub use self::logger::Logger;
pub use self::output_paths::{derive_identifier, OutputPaths};
pub use self::profiler::{calculate_chunk_size, PerformanceProfiler};
