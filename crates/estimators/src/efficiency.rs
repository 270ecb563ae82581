//! Energy Efficiency Tracker
//!
//! Three channels: instantaneous reciprocal efficiency (battery power over
//! speed), a distance-weighted exponential average over a fixed window, and
//! a trip accumulator (running energy and distance since the last reset).
//! Reciprocal efficiency is stored in kWh per km; negative values mean net
//! charge (regen).

use serde::{Deserialize, Serialize};
use vehicle_state::VehicleStateSnapshot;

/// Efficiency tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyConfig {
    /// Below this speed the instantaneous channel is undefined (m/s)
    pub min_speed_mps: f32,
    /// Smoothing window for the recent channel (m)
    pub window_m: f32,
}

impl Default for EfficiencyConfig {
    fn default() -> Self {
        Self {
            min_speed_mps: 0.1,
            window_m: 8000.0,
        }
    }
}

/// Efficiency tracker state
#[derive(Debug, Clone)]
pub struct EfficiencyTracker {
    config: EfficiencyConfig,
    instant_recip: Option<f32>,
    recent_recip: f32,
    recent_seeded: bool,
    trip_energy_wh: f64,
    trip_dist_m: f64,
    last_time_s: Option<f64>,
}

impl EfficiencyTracker {
    pub fn new(config: EfficiencyConfig) -> Self {
        Self {
            config,
            instant_recip: None,
            recent_recip: 0.0,
            recent_seeded: false,
            trip_energy_wh: 0.0,
            trip_dist_m: 0.0,
            last_time_s: None,
        }
    }

    /// Advance from the current frame's snapshot
    pub fn update(&mut self, snapshot: &VehicleStateSnapshot) {
        let now = snapshot.mono_time_s;
        let dt = match self.last_time_s {
            Some(last) => (now - last).max(0.0) as f32,
            None => {
                self.last_time_s = Some(now);
                return;
            }
        };
        self.last_time_s = Some(now);

        // consumption is what the battery sees; wattage is negative while
        // discharging
        let power_w = -snapshot.power.hvb_wattage_w;
        let v = snapshot.v_ego_mps;

        // instantaneous: kW over km/h, i.e. kWh per km
        self.instant_recip = if v > self.config.min_speed_mps {
            Some((power_w * 1e-3) / (v * 3.6))
        } else {
            None
        };

        // recent: EMA weighted by distance fraction of the window
        if let Some(instant) = self.instant_recip {
            let alpha = (v * dt / self.config.window_m).clamp(0.0, 1.0);
            self.recent_recip += alpha * (instant - self.recent_recip);
            self.recent_seeded = true;
        }

        // trip accumulator
        self.trip_energy_wh += (power_w * dt) as f64 / 3600.0;
        self.trip_dist_m += (v * dt) as f64;
    }

    /// Instantaneous reciprocal efficiency (kWh/km), undefined below the
    /// minimum speed
    pub fn instant_recip(&self) -> Option<f32> {
        self.instant_recip
    }

    /// Window-averaged reciprocal efficiency (kWh/km)
    pub fn recent_recip(&self) -> Option<f32> {
        self.recent_seeded.then_some(self.recent_recip)
    }

    /// Trip-average efficiency (km/kWh), undefined until energy has flowed
    pub fn trip_efficiency(&self) -> Option<f32> {
        if self.trip_energy_wh.abs() < 1e-9 {
            None
        } else {
            Some((self.trip_dist_m / self.trip_energy_wh) as f32)
        }
    }

    /// Energy consumed since the last trip reset (Wh)
    pub fn trip_energy_wh(&self) -> f64 {
        self.trip_energy_wh
    }

    /// Distance traveled since the last trip reset (m)
    pub fn trip_dist_m(&self) -> f64 {
        self.trip_dist_m
    }

    /// External trip boundary: zero the accumulators
    pub fn reset_trip(&mut self) {
        tracing::info!(
            energy_wh = self.trip_energy_wh,
            dist_m = self.trip_dist_m,
            "trip accumulator reset"
        );
        self.trip_energy_wh = 0.0;
        self.trip_dist_m = 0.0;
    }
}

impl Default for EfficiencyTracker {
    fn default() -> Self {
        Self::new(EfficiencyConfig::default())
    }
}
