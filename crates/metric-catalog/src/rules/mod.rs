//! Per-Kind Evaluation Rules

mod device;
mod driving;
mod energy;

use crate::{MetricKind, RuleFn};
use std::collections::HashMap;

/// Build the full kind-to-rule table
pub(crate) fn registry() -> HashMap<MetricKind, RuleFn> {
    use MetricKind::*;
    let mut rules: HashMap<MetricKind, RuleFn> = HashMap::new();

    rules.insert(CpuTempAndUsage, device::cpu_temp_and_usage as RuleFn);
    rules.insert(CpuTemp, device::cpu_temp);
    rules.insert(MemoryTemp, device::memory_temp);
    rules.insert(AmbientTemp, device::ambient_temp);
    rules.insert(FanSpeed, device::fan_speed);
    rules.insert(MemoryUsage, device::memory_usage);
    rules.insert(FreeStorage, device::free_storage);
    rules.insert(DeviceBattery, device::device_battery);
    rules.insert(GpsAccuracy, device::gps_accuracy);
    rules.insert(Altitude, device::altitude);
    rules.insert(Bearing, device::bearing);

    rules.insert(Acceleration, driving::acceleration);
    rules.insert(LateralAccel, driving::lateral_accel);
    rules.insert(SteeringTorqueEps, driving::steering_torque_eps);
    rules.insert(SteeringAngle, driving::steering_angle);
    rules.insert(DesiredSteeringAngle, driving::desired_steering_angle);
    rules.insert(SteeringAngleError, driving::steering_angle_error);
    rules.insert(DragForce, driving::drag_force);
    rules.insert(DragPower, driving::drag_power);
    rules.insert(EngineRpm, driving::engine_rpm);
    rules.insert(EngineRpmWithCoolant, driving::engine_rpm_with_coolant);
    rules.insert(CoolantTemp, driving::coolant_temp);
    rules.insert(GradeGps, driving::grade_gps);
    rules.insert(GradeDevice, driving::grade_device);
    rules.insert(DeviceRoll, driving::device_roll);
    rules.insert(RoadRoll, driving::road_roll);
    rules.insert(LeadTimeToCollision, driving::lead_time_to_collision);
    rules.insert(LeadDistance, driving::lead_distance);
    rules.insert(LeadTimeGap, driving::lead_time_gap);
    rules.insert(LeadVelocityRelative, driving::lead_velocity_relative);
    rules.insert(LeadVelocityAbsolute, driving::lead_velocity_absolute);
    rules.insert(TrafficCountTotal, driving::traffic_count_total);
    rules.insert(TrafficCountOncoming, driving::traffic_count_oncoming);
    rules.insert(TrafficCountOngoing, driving::traffic_count_ongoing);
    rules.insert(TrafficCountStopped, driving::traffic_count_stopped);
    rules.insert(LaneWidth, driving::lane_width);
    rules.insert(LaneOffset, driving::lane_offset);

    rules.insert(HvbVoltage, energy::hvb_voltage);
    rules.insert(HvbCurrent, energy::hvb_current);
    rules.insert(HvbWattage, energy::hvb_wattage);
    rules.insert(DrivePower, energy::drive_power);
    rules.insert(EvEfficiencyNow, energy::ev_efficiency_now);
    rules.insert(EvEfficiencyRecent, energy::ev_efficiency_recent);
    rules.insert(EvEfficiencyTrip, energy::ev_efficiency_trip);
    rules.insert(EvConsumptionNow, energy::ev_consumption_now);
    rules.insert(EvConsumptionRecent, energy::ev_consumption_recent);
    rules.insert(EvConsumptionTrip, energy::ev_consumption_trip);
    rules.insert(TripDistance, energy::trip_distance);

    rules
}
