//! Catalog Error Types

use thiserror::Error;

/// Errors surfaced by individual metric rules
///
/// Unavailable inputs are not errors (they become placeholder display
/// values); this covers genuinely unexpected per-slot failures, which the
/// controller isolates to the affected slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// A required signal was NaN or infinite
    #[error("non-finite {signal} sample while evaluating {metric}")]
    NonFinite {
        metric: &'static str,
        signal: &'static str,
    },
}
