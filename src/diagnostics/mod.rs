//! Timing data attached to benchmark reports.
pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};
