//! Battery, Power, Efficiency, and Trip Rules

use crate::catalog::{finite, EvalContext};
use crate::{color, format, units, DisplayValue, MetricError};

/// Efficiency readings past this magnitude are shown capped
const EFFICIENCY_CAP: f32 = 100.0;

fn efficiency_unit(ctx: &EvalContext) -> &'static str {
    if ctx.is_metric() {
        "km/kWh"
    } else {
        "mi/kWh"
    }
}

fn consumption_unit(ctx: &EvalContext) -> &'static str {
    if ctx.is_metric() {
        "Wh/km"
    } else {
        "Wh/mi"
    }
}

/// Trip distance in the display unit, short enough for the unit position
fn trip_distance_text(ctx: &EvalContext) -> String {
    let dist_m = ctx.estimators.efficiency.trip_dist_m() as f32;
    let (dist, unit) = if ctx.is_metric() {
        (dist_m / units::METERS_PER_KM, "km")
    } else {
        (dist_m / units::METERS_PER_MILE, "mi")
    };
    if dist >= 100.0 {
        format!("{dist:.0}{unit}")
    } else {
        format!("{dist:.1}{unit}")
    }
}

/// Reciprocal kWh/km reading to a capped distance-per-energy display value
fn efficiency_from_recip(ctx: &EvalContext, recip_kwh_per_km: f32) -> String {
    // recip near zero means effectively unbounded efficiency; the division
    // saturates and the cap formats it
    let eff_km_per_kwh = 1.0 / recip_kwh_per_km;
    let shown = if ctx.is_metric() {
        eff_km_per_kwh
    } else {
        eff_km_per_kwh / units::KM_PER_MILE
    };
    format::fmt_capped_efficiency(shown, EFFICIENCY_CAP)
}

/// Reciprocal kWh/km reading to a Wh-per-distance display value
fn consumption_from_recip(ctx: &EvalContext, recip_kwh_per_km: f32) -> String {
    let wh_per_km = recip_kwh_per_km * 1000.0;
    let shown = if ctx.is_metric() {
        wh_per_km
    } else {
        wh_per_km * units::KM_PER_MILE
    };
    format::fmt_engineering(shown)
}

pub(super) fn hvb_voltage(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let volts = finite("HVB VOLT", "battery voltage", ctx.snapshot.power.hvb_voltage_v)?;
    Ok(DisplayValue::new("HVB VOLT", format!("{volts:.0}"), "V"))
}

pub(super) fn hvb_current(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    // positive while discharging
    let amps = -finite("HVB CUR", "battery current", ctx.snapshot.power.hvb_current_a)?;
    let value = if amps.abs() >= 100.0 {
        format!("{amps:.0}")
    } else {
        format!("{amps:.1}")
    };
    Ok(DisplayValue::new("HVB CUR", value, "A")
        .with_value_color(color::warmth_ramp(amps, 300.0)))
}

pub(super) fn hvb_wattage(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let kw = -finite("HVB POW", "battery wattage", ctx.snapshot.power.hvb_wattage_w)? * 1e-3;
    Ok(DisplayValue::new("HVB POW", format::fmt_auto1(kw), "kW"))
}

pub(super) fn drive_power(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let kw = ctx.estimators.power.headline_w() * 1e-3;
    let (shown, unit) = if ctx.is_metric() {
        (kw, "kW")
    } else {
        (kw * units::KW_TO_HP, "hp")
    };
    Ok(DisplayValue::new("POWER", format::fmt_auto1(shown), unit))
}

pub(super) fn ev_efficiency_now(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let value = match ctx.estimators.efficiency.instant_recip() {
        Some(recip) => efficiency_from_recip(ctx, recip),
        None => "--".to_string(),
    };
    Ok(DisplayValue::new("EFF NOW", value, efficiency_unit(ctx)))
}

pub(super) fn ev_efficiency_recent(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let label = if ctx.is_metric() { "EFF 8KM" } else { "EFF 5MI" };
    let value = match ctx.estimators.efficiency.recent_recip() {
        Some(recip) => efficiency_from_recip(ctx, recip),
        None => "--".to_string(),
    };
    Ok(DisplayValue::new(label, value, efficiency_unit(ctx)))
}

pub(super) fn ev_efficiency_trip(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let value = match ctx.estimators.efficiency.trip_efficiency() {
        Some(eff_km_per_kwh) => {
            let shown = if ctx.is_metric() {
                eff_km_per_kwh
            } else {
                eff_km_per_kwh / units::KM_PER_MILE
            };
            format::fmt_capped_efficiency(shown, EFFICIENCY_CAP)
        }
        None => "--".to_string(),
    };
    Ok(DisplayValue::new("EFF TRIP", value, trip_distance_text(ctx)))
}

pub(super) fn ev_consumption_now(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let value = match ctx.estimators.efficiency.instant_recip() {
        Some(recip) => consumption_from_recip(ctx, recip),
        None => "--".to_string(),
    };
    Ok(DisplayValue::new("CON NOW", value, consumption_unit(ctx)))
}

pub(super) fn ev_consumption_recent(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let label = if ctx.is_metric() { "CON 8KM" } else { "CON 5MI" };
    let value = match ctx.estimators.efficiency.recent_recip() {
        Some(recip) => consumption_from_recip(ctx, recip),
        None => "--".to_string(),
    };
    Ok(DisplayValue::new(label, value, consumption_unit(ctx)))
}

pub(super) fn ev_consumption_trip(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let efficiency = &ctx.estimators.efficiency;
    let dist_m = efficiency.trip_dist_m();
    let value = if dist_m < 1.0 {
        "--".to_string()
    } else {
        let wh_per_km = (efficiency.trip_energy_wh() / (dist_m / 1000.0)) as f32;
        let shown = if ctx.is_metric() {
            wh_per_km
        } else {
            wh_per_km * units::KM_PER_MILE
        };
        format::fmt_engineering(shown)
    };
    Ok(DisplayValue::new("CON TRIP", value, trip_distance_text(ctx)))
}

pub(super) fn trip_distance(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let dist_m = ctx.estimators.efficiency.trip_dist_m() as f32;
    let (dist, unit) = if ctx.is_metric() {
        (dist_m / units::METERS_PER_KM, "km")
    } else {
        (dist_m / units::METERS_PER_MILE, "mi")
    };
    Ok(DisplayValue::new("TRIP", format::fmt_auto(dist), unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, MetricKind};
    use estimators::EstimatorSet;
    use vehicle_state::{UnitSystem, VehicleStateSnapshot};

    fn snapshot_at(t: f64, v_mps: f32, battery_w: f32) -> VehicleStateSnapshot {
        let mut snap = VehicleStateSnapshot {
            mono_time_s: t,
            v_ego_mps: v_mps,
            ..Default::default()
        };
        snap.power.hvb_wattage_w = -battery_w;
        snap
    }

    fn eval(
        kind: MetricKind,
        snapshot: &VehicleStateSnapshot,
        estimators: &EstimatorSet,
    ) -> DisplayValue {
        let ctx = EvalContext {
            snapshot,
            estimators,
        };
        Catalog::new().evaluate(kind, &ctx).unwrap()
    }

    #[test]
    fn test_efficiency_placeholder_before_any_motion() {
        let snapshot = VehicleStateSnapshot::default();
        let estimators = EstimatorSet::default();
        let dv = eval(MetricKind::EvEfficiencyNow, &snapshot, &estimators);
        assert_eq!(dv.value, "--");
        assert_eq!(dv.unit, "km/kWh");
    }

    #[test]
    fn test_instant_efficiency_readout() {
        let mut estimators = EstimatorSet::default();
        // 7.2 kW at 36 km/h: 0.2 kWh/km, i.e. 5 km/kWh
        let snap = snapshot_at(0.0, 10.0, 7200.0);
        estimators.advance(&snap);
        let snap = snapshot_at(0.1, 10.0, 7200.0);
        estimators.advance(&snap);
        let dv = eval(MetricKind::EvEfficiencyNow, &snap, &estimators);
        assert_eq!(dv.value, "5.0");
    }

    #[test]
    fn test_efficiency_caps_with_sign_marker() {
        let mut estimators = EstimatorSet::default();
        // 10 W at 72 km/h: 7200 km/kWh, far past the cap
        estimators.advance(&snapshot_at(0.0, 20.0, 10.0));
        let snap = snapshot_at(0.1, 20.0, 10.0);
        estimators.advance(&snap);
        let dv = eval(MetricKind::EvEfficiencyNow, &snap, &estimators);
        assert_eq!(dv.value, "100+");

        // regen: net charge shows the negative marker
        let mut estimators = EstimatorSet::default();
        estimators.advance(&snapshot_at(0.0, 20.0, -10.0));
        let snap = snapshot_at(0.1, 20.0, -10.0);
        estimators.advance(&snap);
        let dv = eval(MetricKind::EvEfficiencyNow, &snap, &estimators);
        assert_eq!(dv.value, "100-");
    }

    #[test]
    fn test_consumption_engineering_suffix() {
        let mut estimators = EstimatorSet::default();
        // 72 kW at 36 km/h: 2 kWh/km = 2000 Wh/km
        estimators.advance(&snapshot_at(0.0, 10.0, 72_000.0));
        let snap = snapshot_at(0.1, 10.0, 72_000.0);
        estimators.advance(&snap);
        let dv = eval(MetricKind::EvConsumptionNow, &snap, &estimators);
        assert_eq!(dv.value, "2.0k");
        assert_eq!(dv.unit, "Wh/km");
    }

    #[test]
    fn test_trip_efficiency_carries_distance_in_unit() {
        let mut estimators = EstimatorSet::default();
        // 10 m/s at 3.6 kW for 100 s: 1 km on 0.1 kWh
        for i in 0..=1000 {
            estimators.advance(&snapshot_at(i as f64 * 0.1, 10.0, 3600.0));
        }
        let snap = snapshot_at(100.0, 10.0, 3600.0);
        let dv = eval(MetricKind::EvEfficiencyTrip, &snap, &estimators);
        assert_eq!(dv.value, "10");
        assert_eq!(dv.unit, "1.0km");

        let dv = eval(MetricKind::EvConsumptionTrip, &snap, &estimators);
        assert_eq!(dv.value, "100");
    }

    #[test]
    fn test_trip_distance_units() {
        let mut estimators = EstimatorSet::default();
        // 20 m/s for 400 s: 8 km
        for i in 0..=4000 {
            estimators.advance(&snapshot_at(i as f64 * 0.1, 20.0, 1000.0));
        }
        let mut snap = snapshot_at(400.0, 20.0, 1000.0);
        let dv = eval(MetricKind::TripDistance, &snap, &estimators);
        assert_eq!(dv.value, "8.00");
        assert_eq!(dv.unit, "km");

        snap.unit_system = UnitSystem::Imperial;
        let dv = eval(MetricKind::TripDistance, &snap, &estimators);
        assert_eq!(dv.value, "4.97");
        assert_eq!(dv.unit, "mi");
    }

    #[test]
    fn test_headline_power_in_both_unit_systems() {
        let mut estimators = EstimatorSet::default();
        let mut snap = VehicleStateSnapshot::default();
        snap.power.drive_w = 60_000.0;
        for _ in 0..300 {
            estimators.advance(&snap);
        }
        let dv = eval(MetricKind::DrivePower, &snap, &estimators);
        assert_eq!(dv.value, "60");
        assert_eq!(dv.unit, "kW");

        snap.unit_system = UnitSystem::Imperial;
        let dv = eval(MetricKind::DrivePower, &snap, &estimators);
        assert_eq!(dv.value, "80");
        assert_eq!(dv.unit, "hp");
    }

    #[test]
    fn test_battery_readouts() {
        let mut snap = VehicleStateSnapshot::default();
        snap.power.hvb_voltage_v = 386.0;
        snap.power.hvb_current_a = -120.0;
        snap.power.hvb_wattage_w = -46_320.0;
        let estimators = EstimatorSet::default();

        assert_eq!(eval(MetricKind::HvbVoltage, &snap, &estimators).value, "386");
        assert_eq!(eval(MetricKind::HvbCurrent, &snap, &estimators).value, "120");
        assert_eq!(eval(MetricKind::HvbWattage, &snap, &estimators).value, "46");
    }
}
