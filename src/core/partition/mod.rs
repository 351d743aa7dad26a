//! Train/val partitioning: shuffle the discovered pairs, slice them at
//! `floor(count * ratio)` and move each pair into its split directories.

mod executor;
mod plan;
mod report;

pub use executor::{execute_plan, partition_dataset, plan_dataset};
pub use plan::{compute_split_index, shuffle_pairs, SplitPlan};
pub use report::SplitReport;
