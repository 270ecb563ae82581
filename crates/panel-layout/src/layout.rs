//! Slot Grid Layout

use crate::Rect;
use serde::{Deserialize, Serialize};

/// Layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Maximum rows per column
    pub max_rows: usize,
    /// Slot radius at reference row height (px)
    pub base_slot_radius: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_rows: 5,
            base_slot_radius: 96,
        }
    }
}

/// Placement of one visible slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGeometry {
    /// Index into the configured slot sequence (stable touch-region key)
    pub config_index: usize,
    /// Slot sub-rectangle
    pub rect: Rect,
    /// Which column the slot renders in; unit text rotation flips per column
    pub right_column: bool,
}

/// Geometry for one rendered frame of the panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    /// Panel bounding rectangle, also published for touch exclusion
    pub bounds: Rect,
    /// Height of one slot row (px)
    pub slot_height: i32,
    /// Ratio of actual row height to reference row height; reused for fonts
    pub scale: f32,
    /// Visible slots in draw order
    pub slots: Vec<SlotGeometry>,
}

/// Computes panel and per-slot placement from configuration
///
/// Content-independent: only the slot count, pagination offset, and the
/// enclosing region matter here.
#[derive(Debug, Clone, Default)]
pub struct SlotLayoutEngine {
    config: LayoutConfig,
}

impl SlotLayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Number of slots that can be shown at once for a given configured count
    pub fn visible_capacity(&self, slot_count: usize) -> usize {
        if slot_count <= self.config.max_rows {
            slot_count
        } else {
            slot_count.min(self.config.max_rows * 2)
        }
    }

    /// Lay out the currently visible page
    ///
    /// `bounds` is the region the panel may occupy; the panel right-anchors
    /// inside it and centers vertically. `row_offset` shifts which contiguous
    /// block of the configured sequence fills the paged column. Returns `None`
    /// when the panel is disabled (zero slots) or the region is degenerate.
    pub fn layout(
        &self,
        bounds: Rect,
        slot_count: usize,
        row_offset: usize,
        map_open: bool,
    ) -> Option<PanelGeometry> {
        if slot_count == 0 {
            return None;
        }
        let max_rows = self.config.max_rows.max(1);
        let paged = slot_count > max_rows;
        let rows_visible = slot_count.min(max_rows);

        // Row height: never taller than a third of the span, and the paged /
        // compact variants fall back to the reference height.
        let divisor = if rows_visible > 4 || map_open || paged {
            max_rows
        } else {
            rows_visible.max(3)
        };
        let slot_h = bounds.h / divisor as i32;
        let reference_h = bounds.h / max_rows as i32;
        if slot_h <= 0 || reference_h <= 0 {
            return None;
        }
        let scale = slot_h as f32 / reference_h as f32;

        let radius = (self.config.base_slot_radius as f32 * scale) as i32
            + 6
            + if paged { 0 } else { 6 };
        let columns: i32 = if paged { 2 } else { 1 };
        let panel_w = 2 * radius * columns;
        let panel_h = slot_h * rows_visible as i32;
        let panel = Rect::new(
            bounds.right() - panel_w,
            bounds.center_y() - panel_h / 2,
            panel_w,
            panel_h,
        );

        let shown = slot_count.min(rows_visible * columns as usize);
        let mut slots = Vec::with_capacity(shown);
        for vi in 0..shown {
            let (col_x, right_column, config_index) = if paged {
                if vi < rows_visible {
                    // leading block renders in the right column
                    (panel.x + 2 * radius, true, vi)
                } else {
                    // pagination shifts only the trailing block
                    (panel.x, false, vi + row_offset)
                }
            } else {
                (panel.x, true, vi)
            };
            let rect = Rect::new(
                col_x,
                panel.y + (vi % rows_visible) as i32 * slot_h,
                2 * radius,
                slot_h,
            );
            slots.push(SlotGeometry {
                config_index,
                rect,
                right_column,
            });
        }

        Some(PanelGeometry {
            bounds: panel,
            slot_height: slot_h,
            scale,
            slots,
        })
    }
}
