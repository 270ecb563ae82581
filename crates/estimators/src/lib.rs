//! Stateful Estimators
//!
//! Four independent estimators updated once per frame from the vehicle state
//! snapshot, plus the `EstimatorSet` that advances them in a fixed order.
//! Each owns its history exclusively; evaluation only ever reads outputs.

mod efficiency;
mod grade;
mod lead;
mod power;
mod set;

pub use efficiency::{EfficiencyConfig, EfficiencyTracker};
pub use grade::{GradeConfig, RollingGradeEstimator};
pub use lead::{LeadAveragerConfig, LeadPositionAverager};
pub use power::{PowerChannel, PowerSmoother, PowerSmootherConfig};
pub use set::{EstimatorSet, EstimatorSetConfig};
