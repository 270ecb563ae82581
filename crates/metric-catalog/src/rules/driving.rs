//! Dynamics, Engine, Attitude, Lead, and Lane Rules

use super::device::{display_temp, temp_unit};
use crate::catalog::{finite, EvalContext};
use crate::{color, format, units, DisplayValue, MetricError, Rgba};

/// Angles under ten degrees keep one decimal
fn fmt_angle(deg: f32) -> String {
    if deg.abs() < 10.0 {
        format!("{deg:.1}")
    } else {
        format!("{deg:.0}")
    }
}

pub(super) fn acceleration(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let accel = finite("ACCEL", "longitudinal acceleration", ctx.snapshot.a_ego_mps2)?;
    Ok(DisplayValue::new("ACCEL", format!("{accel:.1}"), "m/s²"))
}

pub(super) fn lateral_accel(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let accel = finite("LAT ACC", "lateral acceleration", ctx.snapshot.lat_accel_mps2)?;
    Ok(DisplayValue::new("LAT ACC", format!("{accel:.1}"), "m/s²"))
}

pub(super) fn steering_torque_eps(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let torque = finite("EPS TRQ", "EPS torque", ctx.snapshot.steering_torque_eps_nm)?;
    Ok(DisplayValue::new("EPS TRQ", format::fmt_auto1(torque), "Nm"))
}

pub(super) fn steering_angle(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let angle = finite("STEER", "steering angle", ctx.snapshot.steering_angle_deg)?;
    Ok(DisplayValue::new("STEER", fmt_angle(angle), "°")
        .with_value_color(color::warmth_ramp(angle, 30.0)))
}

pub(super) fn desired_steering_angle(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    if !ctx.snapshot.controls_enabled {
        return Ok(DisplayValue::new("DES STEER", "-", "°"));
    }
    let angle = finite(
        "DES STEER",
        "desired steering angle",
        ctx.snapshot.steering_angle_desired_deg,
    )?;
    Ok(DisplayValue::new("DES STEER", fmt_angle(angle), "°")
        .with_value_color(color::warmth_ramp(angle, 30.0)))
}

pub(super) fn steering_angle_error(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    if !ctx.snapshot.controls_enabled {
        return Ok(DisplayValue::new("STEER ERR", "-", "°"));
    }
    let error = finite(
        "STEER ERR",
        "steering angle error",
        ctx.snapshot.steering_angle_error_deg,
    )?;
    Ok(DisplayValue::new("STEER ERR", fmt_angle(error), "°")
        .with_value_color(color::warmth_ramp(error, 5.0)))
}

pub(super) fn drag_force(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let force_kn = finite("DRAG FRC", "drag force", ctx.snapshot.drag_force_n)? * 1e-3;
    Ok(DisplayValue::new("DRAG FRC", format::fmt_auto(force_kn), "kN"))
}

pub(super) fn drag_power(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let power_kw = finite("DRAG POW", "drag power", ctx.snapshot.drag_power_w)? * 1e-3;
    let (shown, unit) = if ctx.is_metric() {
        (power_kw, "kW")
    } else {
        (power_kw * units::KW_TO_HP, "hp")
    };
    Ok(DisplayValue::new("DRAG POW", format::fmt_auto(shown), unit))
}

pub(super) fn engine_rpm(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let rpm = ctx.snapshot.engine_rpm;
    let value = if rpm == 0 {
        "OFF".to_string()
    } else {
        rpm.to_string()
    };
    Ok(DisplayValue::new("ENG RPM", value, ""))
}

/// Coolant "engine off" threshold in the displayed unit
fn coolant_off_threshold(ctx: &EvalContext) -> f32 {
    if ctx.is_metric() {
        55.0
    } else {
        130.0
    }
}

/// Band color for a displayed coolant temperature: too-cool, nominal,
/// approaching-hot, hot
fn coolant_band(ctx: &EvalContext, temp: f32) -> Rgba {
    let (cold, warn, hot) = if ctx.is_metric() {
        (74.0, 99.0, 115.0)
    } else {
        (165.0, 210.0, 240.0)
    };
    if temp < cold {
        Rgba::CYAN
    } else if temp > hot {
        Rgba::RED
    } else if temp > warn {
        Rgba::ORANGE
    } else {
        Rgba::WHITE
    }
}

pub(super) fn engine_rpm_with_coolant(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let temp = display_temp(
        ctx,
        finite("ENGINE", "coolant temperature", ctx.snapshot.coolant_temp_c)?,
    );
    let rpm = ctx.snapshot.engine_rpm;
    let value = if rpm == 0 && temp < coolant_off_threshold(ctx) {
        "OFF".to_string()
    } else {
        rpm.to_string()
    };
    Ok(DisplayValue::new("ENGINE", value, format!("{temp:.0}°"))
        .with_unit_color(coolant_band(ctx, temp)))
}

pub(super) fn coolant_temp(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let temp = display_temp(
        ctx,
        finite("COOLANT", "coolant temperature", ctx.snapshot.coolant_temp_c)?,
    );
    if ctx.snapshot.engine_rpm == 0 && temp < coolant_off_threshold(ctx) {
        return Ok(DisplayValue::new("COOLANT", "OFF", temp_unit(ctx)));
    }
    Ok(
        DisplayValue::new("COOLANT", format!("{temp:.0}"), temp_unit(ctx))
            .with_value_color(coolant_band(ctx, temp)),
    )
}

pub(super) fn grade_gps(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    match ctx.estimators.grade.grade_percent() {
        Some(grade) => Ok(DisplayValue::new("GRADE GPS", format!("{grade:.1}"), "%")
            .with_value_color(color::warmth_ramp(grade, 8.0))),
        None => Ok(DisplayValue::new("GRADE GPS", "-", "%")),
    }
}

pub(super) fn grade_device(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    // tan blows up as pitch approaches ±90°
    let grade = finite(
        "GRADE",
        "device pitch grade",
        ctx.snapshot.device_pitch_rad.tan() * 100.0,
    )?;
    Ok(DisplayValue::new("GRADE", format!("{grade:.1}"), "%")
        .with_value_color(color::warmth_ramp(grade, 8.0)))
}

pub(super) fn device_roll(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let roll = finite("DEV ROLL", "device roll", ctx.snapshot.device_roll_rad.to_degrees())?;
    Ok(DisplayValue::new("DEV ROLL", format!("{roll:.1}"), "°"))
}

pub(super) fn road_roll(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let roll = finite("ROAD ROLL", "road roll", ctx.snapshot.road_roll_rad.to_degrees())?;
    Ok(DisplayValue::new("ROAD ROLL", format!("{roll:.1}"), "°"))
}

pub(super) fn lead_time_to_collision(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let lead = &ctx.snapshot.lead;
    // gate on an actually-closing lead; near-zero closing speed means no TTC
    if !lead.status || lead.v_rel_mps >= -0.01 {
        return Ok(DisplayValue::new("TTC", "-", "s"));
    }
    let ttc = -lead.d_rel_m / lead.v_rel_mps;
    let value = if ttc > 99.0 {
        "99+".to_string()
    } else {
        format::fmt_auto1(ttc)
    };
    Ok(DisplayValue::new("TTC", value, "s").with_value_color(color::cool_ramp(0.333 * ttc)))
}

pub(super) fn lead_distance(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let lead = &ctx.snapshot.lead;
    let unit = if ctx.is_metric() { "m" } else { "ft" };
    if !lead.status {
        return Ok(DisplayValue::new("REL DIST", "-", unit));
    }
    let (shown, fraction) = if ctx.is_metric() {
        (lead.d_rel_m, 0.0333 * lead.d_rel_m)
    } else {
        let ft = lead.d_rel_m * units::M_TO_FT;
        (ft, 0.01 * ft)
    };
    Ok(DisplayValue::new("REL DIST", format!("{shown:.0}"), unit)
        .with_value_color(color::cool_ramp(fraction)))
}

pub(super) fn lead_time_gap(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let lead = &ctx.snapshot.lead;
    if !lead.status || ctx.snapshot.v_ego_mps <= 0.5 {
        return Ok(DisplayValue::new("TIME GAP", "-", "s"));
    }
    let gap = lead.d_rel_m / ctx.snapshot.v_ego_mps;
    Ok(DisplayValue::new("TIME GAP", format!("{gap:.1}"), "s")
        .with_value_color(color::cool_ramp(0.6667 * gap)))
}

fn speed_unit(ctx: &EvalContext) -> (&'static str, f32) {
    if ctx.is_metric() {
        ("km/h", units::MPS_TO_KPH)
    } else {
        ("mph", units::MPS_TO_MPH)
    }
}

pub(super) fn lead_velocity_relative(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let lead = &ctx.snapshot.lead;
    let (unit, factor) = speed_unit(ctx);
    if !lead.status {
        return Ok(DisplayValue::new("REL SPEED", "-", unit));
    }
    let shown = lead.v_rel_mps * factor;
    // only a closing lead warms the color
    Ok(DisplayValue::new("REL SPEED", format::fmt_auto1(shown), unit)
        .with_value_color(color::warmth_ramp(lead.v_rel_mps.min(0.0), 5.0)))
}

pub(super) fn lead_velocity_absolute(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let lead = &ctx.snapshot.lead;
    let (unit, factor) = speed_unit(ctx);
    if !lead.status {
        return Ok(DisplayValue::new("LEAD SPD", "-", unit));
    }
    Ok(DisplayValue::new(
        "LEAD SPD",
        format::fmt_auto1(lead.v_abs_mps * factor),
        unit,
    ))
}

pub(super) fn traffic_count_total(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    Ok(DisplayValue::new(
        "TRAFFIC",
        ctx.snapshot.traffic.total().to_string(),
        "",
    ))
}

pub(super) fn traffic_count_oncoming(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    Ok(DisplayValue::new(
        "ONCOMING",
        ctx.snapshot.traffic.oncoming.to_string(),
        "",
    ))
}

pub(super) fn traffic_count_ongoing(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    Ok(DisplayValue::new(
        "SAME DIR",
        ctx.snapshot.traffic.ongoing.to_string(),
        "",
    ))
}

pub(super) fn traffic_count_stopped(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    Ok(DisplayValue::new(
        "STOPPED",
        ctx.snapshot.traffic.stopped.to_string(),
        "",
    ))
}

pub(super) fn lane_width(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let width_m = finite("LANE WIDTH", "lane width", ctx.snapshot.lane.lane_width_m)?;
    let (shown, unit) = if ctx.is_metric() {
        (width_m, "m")
    } else {
        (width_m * units::M_TO_FT, "ft")
    };
    Ok(DisplayValue::new("LANE WIDTH", format!("{shown:.1}"), unit))
}

pub(super) fn lane_offset(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let offset_m = finite("LANE POS", "lane offset", ctx.snapshot.lane.center_offset_m)?;
    let (shown, unit) = if ctx.is_metric() {
        (offset_m, "m")
    } else {
        (offset_m * units::M_TO_FT, "ft")
    };
    Ok(DisplayValue::new("LANE POS", format!("{shown:.2}"), unit))
}
