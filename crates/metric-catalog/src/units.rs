//! Unit Conversion Table
//!
//! Single source for every conversion constant used by the catalog.

pub const MPS_TO_KPH: f32 = 3.6;
pub const MPS_TO_MPH: f32 = 2.236_936_3;
pub const M_TO_FT: f32 = 3.280_84;
pub const METERS_PER_KM: f32 = 1000.0;
pub const METERS_PER_MILE: f32 = 1609.344;
pub const KM_PER_MILE: f32 = 1.609_344;
pub const KW_TO_HP: f32 = 1.341_02;

pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    c * 1.8 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_factors_agree() {
        // both factors must describe the same meter
        let kph_via_mph = MPS_TO_MPH * KM_PER_MILE;
        assert!((kph_via_mph - MPS_TO_KPH).abs() < 1e-3);
    }

    #[test]
    fn test_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }
}
