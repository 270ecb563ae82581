//! Frame Orchestration

use crate::commands::{DrawCommand, FrameOutput, IconKind, RegionKey, TextAlign, TouchRegion};
use crate::config::PanelConfiguration;
use estimators::{EstimatorSet, EstimatorSetConfig};
use metric_catalog::{Catalog, DisplayValue, EvalContext};
use panel_layout::{LayoutConfig, Rect, SlotGeometry, SlotLayoutEngine};
use vehicle_state::VehicleStateSnapshot;

/// Font sizes at reference row height (px); the layout scale multiplies them
const VALUE_FONT_PX: f32 = 78.0;
const LABEL_FONT_PX: f32 = 32.0 * 0.9;
const UNIT_FONT_PX: f32 = 38.0;

/// Lead chevron icon size (px)
const CHEVRON_PX: i32 = 64;

/// Collected tuning knobs for the controller's collaborators
#[derive(Debug, Clone, Default)]
pub struct PanelControllerConfig {
    pub layout: LayoutConfig,
    pub estimators: EstimatorSetConfig,
}

/// Owns the panel's session state and produces one `FrameOutput` per frame
///
/// While no slots are configured the panel is inactive: `render_frame`
/// returns an empty output and estimator state does not advance, so a later
/// activation starts from histories untouched by the inactive period.
pub struct PanelController {
    config: PanelConfiguration,
    layout: LayoutConfig,
    catalog: Catalog,
    estimators: EstimatorSet,
}

impl PanelController {
    pub fn new(config: PanelConfiguration) -> Self {
        Self::with_config(PanelControllerConfig::default(), config)
    }

    pub fn with_config(controller: PanelControllerConfig, config: PanelConfiguration) -> Self {
        tracing::info!(slots = config.slots().len(), "panel controller created");
        Self {
            config,
            layout: controller.layout,
            catalog: Catalog::new(),
            estimators: EstimatorSet::new(controller.estimators),
        }
    }

    pub fn configuration(&self) -> &PanelConfiguration {
        &self.config
    }

    /// Settings collaborator entry point: slot list and pagination edits
    pub fn configuration_mut(&mut self) -> &mut PanelConfiguration {
        &mut self.config
    }

    /// External trip boundary (long-press on a trip slot, ignition cycle)
    pub fn reset_trip(&mut self) {
        self.estimators.efficiency.reset_trip();
    }

    /// Produce this frame's draw commands and touch regions
    pub fn render_frame(
        &mut self,
        snapshot: &VehicleStateSnapshot,
        bounds: Rect,
        map_open: bool,
    ) -> FrameOutput {
        let slot_count = self.config.slots().len();
        if slot_count == 0 {
            return FrameOutput::default();
        }

        self.estimators.advance(snapshot);

        // the configuration's row limit drives the layout, so pagination and
        // geometry always agree on capacity
        let engine = SlotLayoutEngine::new(LayoutConfig {
            max_rows: self.config.max_rows(),
            ..self.layout.clone()
        });
        let Some(geometry) = engine.layout(bounds, slot_count, self.config.row_offset(), map_open)
        else {
            return FrameOutput::default();
        };

        let mut output = FrameOutput::default();
        output.commands.push(DrawCommand::Panel {
            rect: geometry.bounds,
        });
        output.touch_regions.push(TouchRegion {
            key: RegionKey::Panel,
            rect: geometry.bounds,
        });

        let ctx = EvalContext {
            snapshot,
            estimators: &self.estimators,
        };
        for slot in &geometry.slots {
            let Some(&kind) = self.config.slots().get(slot.config_index) else {
                continue;
            };
            // one bad slot never takes down the frame
            let value = match self.catalog.evaluate(kind, &ctx) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(?kind, error = %err, "slot evaluation failed");
                    Catalog::sentinel()
                }
            };
            Self::emit_slot(&mut output, slot, geometry.scale, &value);
            output.touch_regions.push(TouchRegion {
                key: RegionKey::Slot(slot.config_index),
                rect: slot.rect,
            });
        }

        // lead chevron at the window-averaged screen position, so the icon
        // does not jitter frame to frame
        if snapshot.lead.status {
            if let Some((x, y)) = self.estimators.lead_position.average() {
                output.commands.push(DrawCommand::Icon {
                    icon: IconKind::LeadChevron,
                    x,
                    y,
                    px: CHEVRON_PX,
                });
            }
        }
        output
    }

    fn emit_slot(output: &mut FrameOutput, slot: &SlotGeometry, scale: f32, value: &DisplayValue) {
        let rect = slot.rect;

        let mut value_px = (VALUE_FONT_PX * scale) as i32 + value.font_delta;
        let value_chars = value.value.chars().count() as i32;
        if value_chars > 4 {
            value_px -= 8 * (value_chars - 4);
        }
        output.commands.push(DrawCommand::Text {
            text: value.value.clone(),
            x: rect.center_x(),
            y: rect.y + (rect.h as f32 * 0.5) as i32,
            font_px: value_px,
            color: value.value_color,
            align: TextAlign::Center,
            rotation_deg: 0.0,
        });

        output.commands.push(DrawCommand::Text {
            text: value.label.clone(),
            x: rect.center_x(),
            y: rect.y + (rect.h as f32 * 0.85) as i32,
            font_px: (LABEL_FONT_PX * scale) as i32,
            color: value.label_color,
            align: TextAlign::Center,
            rotation_deg: 0.0,
        });

        if !value.unit.is_empty() {
            let mut unit_px = (UNIT_FONT_PX * scale) as i32;
            let unit_chars = value.unit.chars().count() as i32;
            if unit_chars > 5 {
                unit_px -= 5 * (unit_chars - 5);
            }
            // unit text runs along the slot's outer edge, flipped per column
            let (x, rotation_deg) = if slot.right_column {
                (rect.right(), -90.0)
            } else {
                (rect.x, 90.0)
            };
            output.commands.push(DrawCommand::Text {
                text: value.unit.clone(),
                x,
                y: rect.center_y(),
                font_px: unit_px,
                color: value.unit_color,
                align: TextAlign::Center,
                rotation_deg,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metric_catalog::{MetricKind, Rgba};
    use proptest::prelude::*;

    fn display() -> Rect {
        Rect::new(0, 0, 1620, 820)
    }

    fn controller(kinds: Vec<MetricKind>) -> PanelController {
        PanelController::new(PanelConfiguration::new(kinds))
    }

    fn texts(output: &FrameOutput) -> Vec<&str> {
        output
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn text_color(output: &FrameOutput, wanted: &str) -> Option<Rgba> {
        output.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, color, .. } if text == wanted => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn test_zero_slots_emit_nothing() {
        let mut controller = controller(Vec::new());
        let snapshot = VehicleStateSnapshot::default();
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(output.commands.is_empty());
        assert!(output.touch_regions.is_empty());
        assert_eq!(output.panel_bounds(), None);
    }

    #[test]
    fn test_inactive_panel_freezes_estimators() {
        let mut controller = controller(Vec::new());
        let mut snapshot = VehicleStateSnapshot {
            v_ego_mps: 30.0,
            ..Default::default()
        };
        for i in 0..100 {
            snapshot.mono_time_s = i as f64 * 0.1;
            controller.render_frame(&snapshot, display(), false);
        }

        // activation starts the trip from zero, not from the inactive drive
        controller
            .configuration_mut()
            .set_slots(vec![MetricKind::TripDistance]);
        snapshot.mono_time_s = 10.0;
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(texts(&output).contains(&"0.00"));
    }

    #[test]
    fn test_coolant_scenario_engine_off() {
        let mut controller = controller(vec![MetricKind::CoolantTemp]);
        let mut snapshot = VehicleStateSnapshot::default();
        snapshot.engine_rpm = 0;
        snapshot.coolant_temp_c = 40.0;
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(texts(&output).contains(&"OFF"));
    }

    #[test]
    fn test_coolant_scenario_nominal_and_hot() {
        let mut controller = controller(vec![MetricKind::CoolantTemp]);
        let mut snapshot = VehicleStateSnapshot::default();
        snapshot.engine_rpm = 2000;
        snapshot.coolant_temp_c = 80.0;
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(texts(&output).contains(&"80"));
        assert!(texts(&output).contains(&"°C"));
        assert_eq!(text_color(&output, "80"), Some(Rgba::WHITE));

        snapshot.coolant_temp_c = 120.0;
        let output = controller.render_frame(&snapshot, display(), false);
        assert_eq!(text_color(&output, "120"), Some(Rgba::RED));
    }

    #[test]
    fn test_absent_lead_shows_placeholder() {
        let mut controller = controller(vec![MetricKind::LeadTimeToCollision]);
        let snapshot = VehicleStateSnapshot::default();
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(texts(&output).contains(&"-"));
        assert!(texts(&output).contains(&"TTC"));
    }

    #[test]
    fn test_failed_slot_isolated_to_sentinel() {
        let mut controller = controller(vec![MetricKind::FanSpeed, MetricKind::CoolantTemp]);
        let mut snapshot = VehicleStateSnapshot::default();
        snapshot.thermals.fan_speed_percent = f32::NAN;
        snapshot.engine_rpm = 2000;
        snapshot.coolant_temp_c = 80.0;
        let output = controller.render_frame(&snapshot, display(), false);
        let texts = texts(&output);
        // the poisoned slot degrades to the sentinel, its neighbor is fine
        assert!(texts.contains(&"INVALID"));
        assert!(texts.contains(&"42"));
        assert!(texts.contains(&"80"));
    }

    #[test]
    fn test_touch_regions_keyed_by_config_index() {
        let mut controller = controller(vec![
            MetricKind::CoolantTemp,
            MetricKind::Acceleration,
            MetricKind::TripDistance,
        ]);
        let snapshot = VehicleStateSnapshot::default();
        let output = controller.render_frame(&snapshot, display(), false);

        let keys: Vec<RegionKey> = output.touch_regions.iter().map(|r| r.key).collect();
        assert!(keys.contains(&RegionKey::Panel));
        for i in 0..3 {
            assert!(keys.contains(&RegionKey::Slot(i)));
        }

        // a tap inside a slot resolves to that slot, not the panel
        let rect = output
            .touch_regions
            .iter()
            .find(|r| r.key == RegionKey::Slot(1))
            .map(|r| r.rect)
            .expect("slot 1 region missing");
        assert_eq!(
            output.hit_test(rect.center_x(), rect.center_y()),
            Some(RegionKey::Slot(1))
        );
    }

    #[test]
    fn test_wide_value_shrinks_font() {
        let mut controller = controller(vec![MetricKind::EngineRpm]);
        let mut snapshot = VehicleStateSnapshot::default();
        snapshot.engine_rpm = 1200;
        let output = controller.render_frame(&snapshot, display(), false);
        let short_px = match &output.commands[1] {
            DrawCommand::Text { font_px, .. } => *font_px,
            other => panic!("expected value text, got {other:?}"),
        };

        snapshot.engine_rpm = 12_000;
        let output = controller.render_frame(&snapshot, display(), false);
        let wide_px = match &output.commands[1] {
            DrawCommand::Text { font_px, .. } => *font_px,
            other => panic!("expected value text, got {other:?}"),
        };
        assert_eq!(wide_px, short_px - 8);
    }

    #[test]
    fn test_unit_rotation_flips_per_column() {
        let kinds: Vec<MetricKind> = MetricKind::all().iter().copied().take(8).collect();
        let mut controller = controller(kinds);
        let mut snapshot = VehicleStateSnapshot::default();
        snapshot.gps.accuracy_m = 1.0;
        let output = controller.render_frame(&snapshot, display(), false);
        let rotations: Vec<f32> = output
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { rotation_deg, .. } if *rotation_deg != 0.0 => {
                    Some(*rotation_deg)
                }
                _ => None,
            })
            .collect();
        assert!(rotations.contains(&-90.0));
        assert!(rotations.contains(&90.0));
    }

    #[test]
    fn test_pagination_changes_rendered_kinds_not_geometry() {
        let kinds: Vec<MetricKind> = MetricKind::all().iter().copied().take(12).collect();
        let mut controller = controller(kinds);
        let snapshot = VehicleStateSnapshot::default();

        let before = controller.render_frame(&snapshot, display(), false);
        controller.configuration_mut().set_row_offset(2).unwrap();
        let after = controller.render_frame(&snapshot, display(), false);

        assert_eq!(before.panel_bounds(), after.panel_bounds());
        let keys_before: Vec<RegionKey> = before.touch_regions.iter().map(|r| r.key).collect();
        let keys_after: Vec<RegionKey> = after.touch_regions.iter().map(|r| r.key).collect();
        assert!(keys_before.contains(&RegionKey::Slot(5)));
        assert!(!keys_after.contains(&RegionKey::Slot(5)));
        assert!(keys_after.contains(&RegionKey::Slot(11)));
    }

    #[test]
    fn test_lead_chevron_tracks_averaged_position() {
        let mut controller = controller(vec![MetricKind::LeadDistance]);
        let mut snapshot = VehicleStateSnapshot::default();
        snapshot.lead.status = true;
        snapshot.lead.d_rel_m = 30.0;
        snapshot.lead.screen_x = 800;
        snapshot.lead.screen_y = 420;
        let mut output = FrameOutput::default();
        for i in 0..10 {
            snapshot.mono_time_s = i as f64 * 0.1;
            output = controller.render_frame(&snapshot, display(), false);
        }
        let chevron = output.commands.iter().find_map(|c| match c {
            DrawCommand::Icon {
                icon: IconKind::LeadChevron,
                x,
                y,
                ..
            } => Some((*x, *y)),
            _ => None,
        });
        assert_eq!(chevron, Some((800, 420)));

        snapshot.lead.status = false;
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(!output
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Icon { .. })));
    }

    #[test]
    fn test_trip_reset() {
        let mut controller = controller(vec![MetricKind::TripDistance]);
        let mut snapshot = VehicleStateSnapshot {
            v_ego_mps: 20.0,
            ..Default::default()
        };
        for i in 0..=500 {
            snapshot.mono_time_s = i as f64 * 0.1;
            controller.render_frame(&snapshot, display(), false);
        }
        snapshot.mono_time_s = 50.1;
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(!texts(&output).contains(&"0.00"));

        controller.reset_trip();
        snapshot.mono_time_s = 50.2;
        let output = controller.render_frame(&snapshot, display(), false);
        assert!(texts(&output).contains(&"0.00"));
    }

    proptest! {
        /// Every touch region stays inside the panel and slot keys stay in
        /// range, whatever the slot count and page
        #[test]
        fn prop_touch_regions_consistent(n in 1usize..16, offset in 0usize..4) {
            let kinds: Vec<MetricKind> =
                MetricKind::all().iter().copied().cycle().take(n).collect();
            let mut controller = controller(kinds);
            let offset = offset.min(controller.configuration().max_row_offset());
            controller.configuration_mut().set_row_offset(offset).unwrap();
            let snapshot = VehicleStateSnapshot::default();
            let output = controller.render_frame(&snapshot, display(), false);

            let bounds = output.panel_bounds().expect("active panel");
            for region in &output.touch_regions {
                prop_assert!(bounds.encloses(&region.rect));
                if let RegionKey::Slot(i) = region.key {
                    prop_assert!(i < n);
                }
            }
        }
    }
}
