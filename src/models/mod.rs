mod distribution;
mod trace_record;

pub use distribution::DistributionKind;
pub use trace_record::{Operation, OperationTokens, TraceRecord};
