pub mod metrics;
pub mod output;
pub mod profiles;

pub use metrics::{DietSummary, EvaluationConfig, EvaluationReport, SampleResult, evaluate, summarize};
pub use output::{print_summary, write_csv, write_summary_json};
pub use profiles::{ProfileRanges, random_profile};
