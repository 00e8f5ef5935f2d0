pub mod csv;
pub mod plot;
pub mod statistics;
pub mod summary;
pub mod writer;

pub use self::csv::{save_cdf_to_csv, write_cdf_rows};
pub use plot::plot_cdf;
pub use statistics::{collect_statistics, print_distribution_statistics, DistributionStatistics, SampleStats};
pub use summary::{write_summary, RunSummary};
pub use writer::{DistributionOutcome, ResultWriter, SkipReason, WriteOutcome, WriteReport};
