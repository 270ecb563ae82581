//! Panel Layout Engine
//!
//! Computes the metrics panel's bounding rectangle and per-slot geometry from
//! the configured slot count and the enclosing display region. Layout is
//! independent of metric content; the same scale factor it derives for row
//! heights is reused by the evaluator for font sizing.

mod layout;
mod rect;

pub use layout::{LayoutConfig, PanelGeometry, SlotGeometry, SlotLayoutEngine};
pub use rect::Rect;
