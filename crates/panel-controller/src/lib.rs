//! Panel Controller
//!
//! Owns the panel's per-session state (configuration, estimators, layout,
//! catalog) and turns one vehicle state snapshot per frame into draw commands
//! and touch regions. The panel is inactive while no slots are configured:
//! nothing is emitted and no estimator state advances.

mod commands;
mod config;
mod controller;

pub use commands::{DrawCommand, FrameOutput, IconKind, RegionKey, TextAlign, TouchRegion};
pub use config::{ConfigError, PanelConfiguration};
pub use controller::{PanelController, PanelControllerConfig};
