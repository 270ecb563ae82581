//! Snapshot Types

use serde::{Deserialize, Serialize};

/// Display unit system selected by the driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn is_metric(self) -> bool {
        self == UnitSystem::Metric
    }
}

/// Device thermal and resource state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceThermals {
    /// Per-core CPU temperatures (°C)
    pub cpu_temps_c: Vec<f32>,
    /// Per-core CPU usage (percent)
    pub cpu_usage_percent: Vec<f32>,
    /// Memory temperature (°C)
    pub memory_temp_c: f32,
    /// Ambient temperature (°C)
    pub ambient_temp_c: f32,
    /// Thermal status: 0 nominal, 1 elevated, 2+ critical
    pub thermal_status: u8,
    /// Fan speed (percent of max)
    pub fan_speed_percent: f32,
    /// Memory usage (percent)
    pub memory_usage_percent: f32,
    /// Free storage (percent)
    pub free_storage_percent: f32,
    /// Device battery charge (percent)
    pub battery_percent: i32,
    /// Device battery current (µA, negative while discharging)
    pub battery_current_ua: i64,
}

impl DeviceThermals {
    /// Mean CPU temperature across cores (°C), 0 if none reported
    pub fn cpu_temp_c(&self) -> f32 {
        if self.cpu_temps_c.is_empty() {
            return 0.0;
        }
        self.cpu_temps_c.iter().sum::<f32>() / self.cpu_temps_c.len() as f32
    }

    /// Mean CPU usage across cores (percent), 0 if none reported
    pub fn cpu_usage(&self) -> f32 {
        if self.cpu_usage_percent.is_empty() {
            return 0.0;
        }
        self.cpu_usage_percent.iter().sum::<f32>() / self.cpu_usage_percent.len() as f32
    }
}

/// GPS fix state
///
/// An accuracy of exactly 0.0 m means "no fix" (receiver convention); a
/// bearing accuracy of 180° means the bearing is invalid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpsFix {
    /// Altitude above sea level (m)
    pub altitude_m: f64,
    /// Horizontal accuracy (m); 0.0 means no fix
    pub accuracy_m: f64,
    /// Bearing (degrees, 0 = north)
    pub bearing_deg: f32,
    /// Bearing accuracy (degrees); 180.0 means invalid
    pub bearing_accuracy_deg: f32,
    /// Number of satellites used in the fix
    pub satellite_count: u16,
}

impl GpsFix {
    pub fn has_fix(&self) -> bool {
        self.accuracy_m != 0.0
    }

    pub fn bearing_valid(&self) -> bool {
        self.bearing_accuracy_deg != 180.0
    }
}

/// Lane geometry from the lateral planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaneGeometry {
    /// Detected lane width (m)
    pub lane_width_m: f32,
    /// Offset of the vehicle from lane center (m, left positive)
    pub center_offset_m: f32,
}

/// Tracked lead vehicle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadTrack {
    /// Whether a lead is currently tracked
    pub status: bool,
    /// Relative distance (m)
    pub d_rel_m: f32,
    /// Relative velocity (m/s, negative when closing)
    pub v_rel_mps: f32,
    /// Absolute lead speed (m/s)
    pub v_abs_mps: f32,
    /// Projected on-screen chevron position (px)
    pub screen_x: i32,
    /// Projected on-screen chevron position (px)
    pub screen_y: i32,
}

/// Nearby vehicle track counts from the radar/vision fusion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrafficCounts {
    /// Same-direction moving tracks
    pub ongoing: u32,
    /// Oncoming tracks
    pub oncoming: u32,
    /// Stopped tracks
    pub stopped: u32,
}

impl TrafficCounts {
    pub fn total(&self) -> u32 {
        self.ongoing + self.oncoming + self.stopped
    }
}

/// Drivetrain and battery power channels (W)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerChannels {
    /// Combustion engine output
    pub ice_w: f32,
    /// Electric drive output
    pub ev_w: f32,
    /// Regenerative braking
    pub regen_w: f32,
    /// Friction braking
    pub friction_brake_w: f32,
    /// Net drivetrain power
    pub drive_w: f32,
    /// High-voltage battery voltage (V)
    pub hvb_voltage_v: f32,
    /// High-voltage battery current (A)
    pub hvb_current_a: f32,
    /// High-voltage battery wattage (W, negative while discharging)
    pub hvb_wattage_w: f32,
}

/// Per-frame read-only vehicle/device state
///
/// Owned by the upstream state bus; the panel engine borrows it for the
/// duration of one frame and never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleStateSnapshot {
    /// Monotonic frame clock (s)
    pub mono_time_s: f64,
    /// Ego speed (m/s)
    pub v_ego_mps: f32,
    /// Ego longitudinal acceleration (m/s²)
    pub a_ego_mps2: f32,
    /// Ego lateral acceleration (m/s²)
    pub lat_accel_mps2: f32,
    /// Engine speed (rpm), 0 when off
    pub engine_rpm: u32,
    /// Engine coolant temperature (°C)
    pub coolant_temp_c: f32,
    /// Measured steering angle (degrees)
    pub steering_angle_deg: f32,
    /// Planner-desired steering angle (degrees)
    pub steering_angle_desired_deg: f32,
    /// Measured minus desired steering angle (degrees)
    pub steering_angle_error_deg: f32,
    /// EPS motor torque (Nm)
    pub steering_torque_eps_nm: f32,
    /// Whether longitudinal/lateral control is engaged
    pub controls_enabled: bool,
    /// Aerodynamic drag force (N)
    pub drag_force_n: f32,
    /// Aerodynamic drag power (W)
    pub drag_power_w: f32,
    /// Device pitch (rad, nose-up positive)
    pub device_pitch_rad: f32,
    /// Device roll (rad)
    pub device_roll_rad: f32,
    /// Road roll from localization (rad)
    pub road_roll_rad: f32,
    /// Device thermal/resource state
    pub thermals: DeviceThermals,
    /// GPS fix
    pub gps: GpsFix,
    /// Lane geometry
    pub lane: LaneGeometry,
    /// Primary lead vehicle track
    pub lead: LeadTrack,
    /// Nearby traffic counts
    pub traffic: TrafficCounts,
    /// Power channels
    pub power: PowerChannels,
    /// Display unit system
    pub unit_system: UnitSystem,
}
