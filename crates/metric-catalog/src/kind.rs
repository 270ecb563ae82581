//! Metric Kinds

use serde::{Deserialize, Serialize};

/// One selectable telemetry quantity
///
/// Quantities with metric/imperial variants are a single kind here; the
/// snapshot's unit system selects conversion and unit text at evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    // device
    CpuTempAndUsage,
    CpuTemp,
    MemoryTemp,
    AmbientTemp,
    FanSpeed,
    MemoryUsage,
    FreeStorage,
    DeviceBattery,
    // gps
    GpsAccuracy,
    Altitude,
    Bearing,
    // dynamics
    Acceleration,
    LateralAccel,
    SteeringTorqueEps,
    SteeringAngle,
    DesiredSteeringAngle,
    SteeringAngleError,
    DragForce,
    DragPower,
    // engine
    EngineRpm,
    EngineRpmWithCoolant,
    CoolantTemp,
    // attitude
    GradeGps,
    GradeDevice,
    DeviceRoll,
    RoadRoll,
    // lead vehicle
    LeadTimeToCollision,
    LeadDistance,
    LeadTimeGap,
    LeadVelocityRelative,
    LeadVelocityAbsolute,
    // traffic
    TrafficCountTotal,
    TrafficCountOncoming,
    TrafficCountOngoing,
    TrafficCountStopped,
    // lane
    LaneWidth,
    LaneOffset,
    // energy
    HvbVoltage,
    HvbCurrent,
    HvbWattage,
    DrivePower,
    EvEfficiencyNow,
    EvEfficiencyRecent,
    EvEfficiencyTrip,
    EvConsumptionNow,
    EvConsumptionRecent,
    EvConsumptionTrip,
    TripDistance,
}

impl MetricKind {
    /// Every kind, in catalog order
    pub fn all() -> &'static [MetricKind] {
        use MetricKind::*;
        &[
            CpuTempAndUsage,
            CpuTemp,
            MemoryTemp,
            AmbientTemp,
            FanSpeed,
            MemoryUsage,
            FreeStorage,
            DeviceBattery,
            GpsAccuracy,
            Altitude,
            Bearing,
            Acceleration,
            LateralAccel,
            SteeringTorqueEps,
            SteeringAngle,
            DesiredSteeringAngle,
            SteeringAngleError,
            DragForce,
            DragPower,
            EngineRpm,
            EngineRpmWithCoolant,
            CoolantTemp,
            GradeGps,
            GradeDevice,
            DeviceRoll,
            RoadRoll,
            LeadTimeToCollision,
            LeadDistance,
            LeadTimeGap,
            LeadVelocityRelative,
            LeadVelocityAbsolute,
            TrafficCountTotal,
            TrafficCountOncoming,
            TrafficCountOngoing,
            TrafficCountStopped,
            LaneWidth,
            LaneOffset,
            HvbVoltage,
            HvbCurrent,
            HvbWattage,
            DrivePower,
            EvEfficiencyNow,
            EvEfficiencyRecent,
            EvEfficiencyTrip,
            EvConsumptionNow,
            EvConsumptionRecent,
            EvConsumptionTrip,
            TripDistance,
        ]
    }
}
