//! Device, Thermal, and GPS Rules

use crate::catalog::{finite, EvalContext};
use crate::{color, units, DisplayValue, MetricError, Rgba};

/// Temperature in the snapshot's display unit
pub(super) fn display_temp(ctx: &EvalContext, celsius: f32) -> f32 {
    if ctx.is_metric() {
        celsius
    } else {
        units::celsius_to_fahrenheit(celsius)
    }
}

pub(super) fn temp_unit(ctx: &EvalContext) -> &'static str {
    if ctx.is_metric() {
        "°C"
    } else {
        "°F"
    }
}

fn thermal_readout(
    ctx: &EvalContext,
    label: &'static str,
    celsius: f32,
) -> Result<DisplayValue, MetricError> {
    let temp = display_temp(ctx, finite(label, "temperature", celsius)?);
    Ok(
        DisplayValue::new(label, format!("{temp:.0}"), temp_unit(ctx))
            .with_value_color(color::thermal_status_color(ctx.snapshot.thermals.thermal_status)),
    )
}

pub(super) fn cpu_temp_and_usage(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let thermals = &ctx.snapshot.thermals;
    let temp = display_temp(ctx, thermals.cpu_temp_c());
    let suffix = if ctx.is_metric() { "C" } else { "F" };
    Ok(DisplayValue::new(
        "CPU",
        format!("{temp:.0}°{suffix}"),
        format!("{:.0}%", thermals.cpu_usage()),
    )
    .with_value_color(color::thermal_status_color(thermals.thermal_status)))
}

pub(super) fn cpu_temp(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    thermal_readout(ctx, "CPU TEMP", ctx.snapshot.thermals.cpu_temp_c())
}

pub(super) fn memory_temp(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    thermal_readout(ctx, "MEM TEMP", ctx.snapshot.thermals.memory_temp_c)
}

pub(super) fn ambient_temp(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    thermal_readout(ctx, "AMBIENT", ctx.snapshot.thermals.ambient_temp_c)
}

pub(super) fn fan_speed(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let speed = finite("FAN", "fan speed", ctx.snapshot.thermals.fan_speed_percent)?;
    Ok(DisplayValue::new("FAN", format!("{speed:.0}"), "%"))
}

pub(super) fn memory_usage(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let used = finite("MEM USED", "memory usage", ctx.snapshot.thermals.memory_usage_percent)?;
    Ok(DisplayValue::new("MEM USED", format!("{used:.0}"), "%"))
}

pub(super) fn free_storage(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let free = finite("SSD FREE", "free storage", ctx.snapshot.thermals.free_storage_percent)?;
    Ok(DisplayValue::new("SSD FREE", format!("{free:.0}"), "%"))
}

pub(super) fn device_battery(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let thermals = &ctx.snapshot.thermals;
    // negative current = discharging
    let amps = thermals.battery_current_ua as f32 * 1e-6;
    Ok(DisplayValue::new(
        "DEV. BATT.",
        format!("{}%", thermals.battery_percent),
        format!("{amps:.1}A"),
    ))
}

pub(super) fn gps_accuracy(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let gps = &ctx.snapshot.gps;
    if !gps.has_fix() {
        return Ok(DisplayValue::new("GPS PREC", "-", ""));
    }
    let accuracy = gps.accuracy_m as f32;
    let value = if accuracy > 9.9 {
        format!("{accuracy:.0}")
    } else {
        format!("{accuracy:.1}")
    };
    let value_color = if accuracy > 5.0 {
        Rgba::RED
    } else if accuracy > 2.5 {
        Rgba::AMBER
    } else {
        Rgba::WHITE
    };
    Ok(
        DisplayValue::new("GPS PREC", value, format!("{}", gps.satellite_count))
            .with_value_color(value_color),
    )
}

pub(super) fn altitude(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let gps = &ctx.snapshot.gps;
    if !gps.has_fix() {
        return Ok(DisplayValue::new("ALTITUDE", "-", ""));
    }
    let altitude_m = finite("ALTITUDE", "altitude", gps.altitude_m as f32)?;
    let (shown, unit) = if ctx.is_metric() {
        (altitude_m, "m")
    } else {
        (altitude_m * units::M_TO_FT, "ft")
    };
    // five-digit readings need a smaller face to stay inside the slot
    let font_delta = if shown.abs() >= 10_000.0 { -10 } else { 0 };
    Ok(DisplayValue::new("ALTITUDE", format!("{shown:.0}"), unit).with_font_delta(font_delta))
}

/// Sixteen-wind compass point for a bearing in degrees
fn compass_point(bearing_deg: f32) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let sector = ((bearing_deg.rem_euclid(360.0) + 11.25) / 22.5) as usize % 16;
    POINTS[sector]
}

pub(super) fn bearing(ctx: &EvalContext) -> Result<DisplayValue, MetricError> {
    let gps = &ctx.snapshot.gps;
    if !gps.has_fix() || !gps.bearing_valid() {
        return Ok(DisplayValue::new("BEARING", "OFF", "-"));
    }
    let bearing_deg = finite("BEARING", "bearing", gps.bearing_deg)?;
    Ok(DisplayValue::new(
        "BEARING",
        compass_point(bearing_deg),
        format!("{bearing_deg:.0}°"),
    ))
}
