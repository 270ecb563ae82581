//! Frame Output Types
//!
//! The controller does no rendering and no input handling itself; it emits a
//! draw-command list for the rendering collaborator and a keyed touch-region
//! table for the input dispatcher.

use metric_catalog::Rgba;
use panel_layout::Rect;
use serde::{Deserialize, Serialize};

/// Horizontal anchoring of a text command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One drawing primitive, in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Panel background
    Panel { rect: Rect },
    /// Text at a point; `rotation_deg` is applied around the anchor (unit
    /// text draws rotated along the slot edge)
    Text {
        text: String,
        x: i32,
        y: i32,
        font_px: i32,
        color: Rgba,
        align: TextAlign,
        rotation_deg: f32,
    },
    /// Icon centered on a point
    Icon {
        icon: IconKind,
        x: i32,
        y: i32,
        px: i32,
    },
}

/// Icons the renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconKind {
    /// Lead vehicle marker, placed at the smoothed screen position
    LeadChevron,
}

/// Key for one interactive rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKey {
    /// The whole panel, published for touch exclusion by collaborators
    Panel,
    /// One slot, keyed by its index into the configured sequence
    Slot(usize),
}

/// One interactive rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchRegion {
    pub key: RegionKey,
    pub rect: Rect,
}

/// Everything one frame produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub commands: Vec<DrawCommand>,
    pub touch_regions: Vec<TouchRegion>,
}

impl FrameOutput {
    /// Panel bounding rectangle, absent while the panel is inactive
    pub fn panel_bounds(&self) -> Option<Rect> {
        self.touch_regions
            .iter()
            .find(|r| r.key == RegionKey::Panel)
            .map(|r| r.rect)
    }

    /// First region containing the point, slots before the panel itself
    pub fn hit_test(&self, x: i32, y: i32) -> Option<RegionKey> {
        self.touch_regions
            .iter()
            .filter(|r| r.key != RegionKey::Panel)
            .chain(self.touch_regions.iter().filter(|r| r.key == RegionKey::Panel))
            .find(|r| r.rect.contains(x, y))
            .map(|r| r.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_prefers_slots() {
        let output = FrameOutput {
            commands: Vec::new(),
            touch_regions: vec![
                TouchRegion {
                    key: RegionKey::Panel,
                    rect: Rect::new(0, 0, 200, 400),
                },
                TouchRegion {
                    key: RegionKey::Slot(3),
                    rect: Rect::new(0, 100, 200, 100),
                },
            ],
        };
        assert_eq!(output.hit_test(50, 150), Some(RegionKey::Slot(3)));
        assert_eq!(output.hit_test(50, 350), Some(RegionKey::Panel));
        assert_eq!(output.hit_test(500, 150), None);
    }

    #[test]
    fn test_empty_output_has_no_bounds() {
        assert_eq!(FrameOutput::default().panel_bounds(), None);
    }
}
