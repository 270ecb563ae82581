//! Display Value Types

use serde::{Deserialize, Serialize};

/// Plain RGBA color; the rendering collaborator owns actual paint state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Default text color
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 200);
    /// Too-cool indication (coolant below operating range)
    pub const CYAN: Rgba = Rgba::new(84, 207, 249, 200);
    /// Critical indication
    pub const RED: Rgba = Rgba::new(255, 0, 0, 200);
    /// Approaching-critical indication
    pub const ORANGE: Rgba = Rgba::new(255, 169, 63, 200);
    /// Degraded-precision indication
    pub const AMBER: Rgba = Rgba::new(255, 188, 3, 200);
    /// Nominal status indication
    pub const GREEN: Rgba = Rgba::new(0, 255, 0, 200);
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// One evaluated metric readout, recomputed every frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValue {
    /// Short label under the value
    pub label: String,
    /// Value text; placeholder text when the input is unavailable
    pub value: String,
    /// Unit text, drawn rotated beside the slot; empty when unitless
    pub unit: String,
    pub value_color: Rgba,
    pub label_color: Rgba,
    pub unit_color: Rgba,
    /// Rule-requested adjustment to the value font size
    pub font_delta: i32,
}

impl DisplayValue {
    /// Default-styled readout
    pub fn new(label: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
            ..Default::default()
        }
    }

    pub fn with_value_color(mut self, color: Rgba) -> Self {
        self.value_color = color;
        self
    }

    pub fn with_unit_color(mut self, color: Rgba) -> Self {
        self.unit_color = color;
        self
    }

    pub fn with_font_delta(mut self, delta: i32) -> Self {
        self.font_delta = delta;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_defaults() {
        let dv = DisplayValue::new("SPEED", "88", "km/h");
        assert_eq!(dv.value_color, Rgba::WHITE);
        assert_eq!(dv.label_color, Rgba::WHITE);
        assert_eq!(dv.font_delta, 0);
    }

    #[test]
    fn test_with_value_color() {
        let dv = DisplayValue::new("X", "1", "").with_value_color(Rgba::RED);
        assert_eq!(dv.value_color, Rgba::RED);
        assert_eq!(dv.unit_color, Rgba::WHITE);
    }
}
