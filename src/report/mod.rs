// Result aggregation: artifact loading, enrichment, flattening.

mod aggregate;
mod types;

pub use aggregate::Aggregator;
pub use types::{Report, ReportError, TestCaseResult};
