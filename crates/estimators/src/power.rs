//! Power Channel Smoother
//!
//! One exponential moving average per drivetrain power channel, plus a
//! separately smoothed headline power number. Channel samples are clamped to
//! non-negative before smoothing; the headline feed is unclamped and prefers
//! the battery wattage whenever its magnitude exceeds the drivetrain reading
//! (captures regen/charging power the drivetrain signal misses).

use serde::{Deserialize, Serialize};
use vehicle_state::VehicleStateSnapshot;

/// Smoothed power channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerChannel {
    Ice = 0,
    Ev = 1,
    Regen = 2,
    FrictionBrake = 3,
}

/// Power smoother configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerSmootherConfig {
    /// EMA smoothing constant, in (0, 1]
    pub ema_k: f32,
}

impl Default for PowerSmootherConfig {
    fn default() -> Self {
        Self { ema_k: 0.2 }
    }
}

/// Power smoother state
#[derive(Debug, Clone)]
pub struct PowerSmoother {
    k: f32,
    channels_kw: [f32; 4],
    headline_w: f32,
}

impl PowerSmoother {
    pub fn new(config: PowerSmootherConfig) -> Self {
        Self {
            k: config.ema_k.clamp(f32::EPSILON, 1.0),
            channels_kw: [0.0; 4],
            headline_w: 0.0,
        }
    }

    /// Advance from the current frame's snapshot
    pub fn update(&mut self, snapshot: &VehicleStateSnapshot) {
        let p = &snapshot.power;
        let samples_w = [p.ice_w, p.ev_w, p.regen_w, p.friction_brake_w];
        for (ema, raw) in self.channels_kw.iter_mut().zip(samples_w) {
            let sample_kw = raw.max(0.0) * 1e-3;
            *ema = self.k * sample_kw + (1.0 - self.k) * *ema;
        }

        let mut headline = p.drive_w;
        let battery = -p.hvb_wattage_w;
        if battery.abs() > headline.abs() {
            headline = battery;
        }
        self.headline_w = self.k * headline + (1.0 - self.k) * self.headline_w;
    }

    /// Smoothed channel power (kW, never negative)
    pub fn channel_kw(&self, channel: PowerChannel) -> f32 {
        self.channels_kw[channel as usize]
    }

    /// Smoothed headline power (W, signed)
    pub fn headline_w(&self) -> f32 {
        self.headline_w
    }
}

impl Default for PowerSmoother {
    fn default() -> Self {
        Self::new(PowerSmootherConfig::default())
    }
}
