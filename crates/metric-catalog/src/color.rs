//! Shared Color Ramps
//!
//! Two fixed numeric ramps reused across the catalog, each clamping every
//! channel to [0, 255].

use crate::Rgba;

fn clamp_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// White toward red as |deviation| approaches `full_scale`
///
/// Used wherever a signed error or load magnitude should warn: steering
/// error, grade, battery voltage deviation, closing speed.
pub fn warmth_ramp(deviation: f32, full_scale: f32) -> Rgba {
    let p = if full_scale != 0.0 {
        deviation.abs() / full_scale
    } else {
        0.0
    };
    Rgba::new(
        255,
        clamp_channel(255.0 - 0.5 * p * 255.0),
        clamp_channel(255.0 - p * 255.0),
        200,
    )
}

/// Red toward white as the fraction grows
///
/// Used where a *small* value is dangerous: time-to-collision, following
/// gap, lead distance.
pub fn cool_ramp(p: f32) -> Rgba {
    Rgba::new(
        255,
        clamp_channel((0.5 + p) * 255.0),
        clamp_channel(p * 255.0),
        200,
    )
}

/// Device thermal status: 0 nominal, 1 elevated, critical otherwise
pub fn thermal_status_color(status: u8) -> Rgba {
    match status {
        0 => Rgba::GREEN,
        1 => Rgba::new(255, 128, 0, 200),
        _ => Rgba::RED,
    }
}
