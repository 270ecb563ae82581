//! Estimator Set

use crate::{
    EfficiencyConfig, EfficiencyTracker, GradeConfig, LeadAveragerConfig, LeadPositionAverager,
    PowerSmoother, PowerSmootherConfig, RollingGradeEstimator,
};
use serde::{Deserialize, Serialize};
use vehicle_state::VehicleStateSnapshot;

/// Configuration for all four estimators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimatorSetConfig {
    pub grade: GradeConfig,
    pub efficiency: EfficiencyConfig,
    pub power: PowerSmootherConfig,
    pub lead: LeadAveragerConfig,
}

/// The panel's four estimators, advanced together once per frame
///
/// Owned exclusively by the panel controller; created once and never reset
/// except through explicit operations (trip reset).
#[derive(Debug)]
pub struct EstimatorSet {
    pub grade: RollingGradeEstimator,
    pub efficiency: EfficiencyTracker,
    pub power: PowerSmoother,
    pub lead_position: LeadPositionAverager,
}

impl EstimatorSet {
    pub fn new(config: EstimatorSetConfig) -> Self {
        tracing::info!("creating estimator set");
        Self {
            grade: RollingGradeEstimator::new(config.grade),
            efficiency: EfficiencyTracker::new(config.efficiency),
            power: PowerSmoother::new(config.power),
            lead_position: LeadPositionAverager::new(config.lead),
        }
    }

    /// Advance every estimator from the new snapshot, in a fixed order
    pub fn advance(&mut self, snapshot: &VehicleStateSnapshot) {
        self.grade.update(snapshot);
        self.efficiency.update(snapshot);
        self.power.update(snapshot);
        if snapshot.lead.status {
            self.lead_position
                .push(snapshot.lead.screen_x, snapshot.lead.screen_y);
        }
    }
}

impl Default for EstimatorSet {
    fn default() -> Self {
        Self::new(EstimatorSetConfig::default())
    }
}
