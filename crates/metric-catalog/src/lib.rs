//! Metric Catalog
//!
//! The mapping from metric kinds to display values. Every kind has one rule
//! function, registered in a lookup table; evaluation is pure (snapshot and
//! estimator outputs in, text/color out) and never fails the frame: missing
//! inputs become placeholders and unknown kinds a fixed sentinel.

mod catalog;
mod color;
mod display;
mod error;
pub mod format;
mod kind;
mod rules;
pub mod units;

pub use catalog::{Catalog, EvalContext, RuleFn};
pub use color::{cool_ramp, thermal_status_color, warmth_ramp};
pub use display::{DisplayValue, Rgba};
pub use error::MetricError;
pub use kind::MetricKind;
