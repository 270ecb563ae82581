//! Rule Registry

use crate::rules;
use crate::{DisplayValue, MetricError, MetricKind};
use estimators::EstimatorSet;
use std::collections::HashMap;
use vehicle_state::VehicleStateSnapshot;

/// Everything a rule may read: the frame's snapshot and the estimators'
/// latest outputs. Shared references only; rules cannot mutate either.
pub struct EvalContext<'a> {
    pub snapshot: &'a VehicleStateSnapshot,
    pub estimators: &'a EstimatorSet,
}

impl EvalContext<'_> {
    pub fn is_metric(&self) -> bool {
        self.snapshot.unit_system.is_metric()
    }
}

/// One metric kind's evaluation rule
pub type RuleFn = fn(&EvalContext) -> Result<DisplayValue, MetricError>;

/// Guard against garbage samples reaching the formatter
pub(crate) fn finite(
    metric: &'static str,
    signal: &'static str,
    v: f32,
) -> Result<f32, MetricError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(MetricError::NonFinite { metric, signal })
    }
}

/// Lookup table from metric kind to rule
pub struct Catalog {
    rules: HashMap<MetricKind, RuleFn>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            rules: rules::registry(),
        }
    }

    /// Evaluate one kind; kinds without a registered rule resolve to the
    /// sentinel rather than failing
    pub fn evaluate(
        &self,
        kind: MetricKind,
        ctx: &EvalContext,
    ) -> Result<DisplayValue, MetricError> {
        match self.rules.get(&kind) {
            Some(rule) => rule(ctx),
            None => {
                tracing::debug!(?kind, "no rule registered, using sentinel");
                Ok(Self::sentinel())
            }
        }
    }

    /// The fixed "invalid metric" display
    pub fn sentinel() -> DisplayValue {
        DisplayValue::new("INVALID", "42", "")
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
