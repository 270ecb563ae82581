//! Panel Configuration

use metric_catalog::MetricKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration mutation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("row offset {offset} exceeds maximum {max} for {slot_count} slots")]
    OffsetOutOfRange {
        offset: usize,
        max: usize,
        slot_count: usize,
    },
    #[error("maximum visible rows must be at least 1")]
    ZeroRows,
}

/// Ordered slot selection plus pagination state
///
/// Insertion order is display order. The row offset selects which contiguous
/// block of the sequence fills the paged column; it is only meaningful when
/// the configured count exceeds what fits on screen, and every mutation keeps
/// it inside `[0, configured_count - visible_capacity]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfiguration {
    slots: Vec<MetricKind>,
    max_rows: usize,
    row_offset: usize,
}

impl PanelConfiguration {
    pub fn new(slots: Vec<MetricKind>) -> Self {
        Self {
            slots,
            max_rows: 5,
            row_offset: 0,
        }
    }

    pub fn slots(&self) -> &[MetricKind] {
        &self.slots
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Slots visible at once for the current configuration
    pub fn visible_capacity(&self) -> usize {
        if self.slots.len() <= self.max_rows {
            self.slots.len()
        } else {
            self.slots.len().min(self.max_rows * 2)
        }
    }

    /// Largest valid row offset
    pub fn max_row_offset(&self) -> usize {
        self.slots.len().saturating_sub(self.visible_capacity())
    }

    /// Replace the slot sequence; the row offset is clamped into the new
    /// valid range rather than reset
    pub fn set_slots(&mut self, slots: Vec<MetricKind>) {
        self.slots = slots;
        self.row_offset = self.row_offset.min(self.max_row_offset());
    }

    pub fn set_max_rows(&mut self, max_rows: usize) -> Result<(), ConfigError> {
        if max_rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        self.max_rows = max_rows;
        self.row_offset = self.row_offset.min(self.max_row_offset());
        Ok(())
    }

    pub fn set_row_offset(&mut self, offset: usize) -> Result<(), ConfigError> {
        let max = self.max_row_offset();
        if offset > max {
            return Err(ConfigError::OffsetOutOfRange {
                offset,
                max,
                slot_count: self.slots.len(),
            });
        }
        self.row_offset = offset;
        Ok(())
    }

    /// Advance the paged block by one row, wrapping at the end
    pub fn cycle_row_offset(&mut self) {
        let max = self.max_row_offset();
        if max == 0 {
            self.row_offset = 0;
        } else if self.row_offset >= max {
            self.row_offset = 0;
        } else {
            self.row_offset += 1;
        }
    }
}

impl Default for PanelConfiguration {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(n: usize) -> Vec<MetricKind> {
        MetricKind::all().iter().copied().take(n).collect()
    }

    #[test]
    fn test_offset_rejected_past_maximum() {
        let mut config = PanelConfiguration::new(kinds(12));
        // capacity 10, so offsets 0..=2 are valid
        assert_eq!(config.max_row_offset(), 2);
        assert!(config.set_row_offset(2).is_ok());
        let err = config.set_row_offset(3).unwrap_err();
        assert!(matches!(err, ConfigError::OffsetOutOfRange { max: 2, .. }));
        assert_eq!(config.row_offset(), 2);
    }

    #[test]
    fn test_unpaginated_offset_is_zero_only() {
        let mut config = PanelConfiguration::new(kinds(4));
        assert_eq!(config.max_row_offset(), 0);
        assert!(config.set_row_offset(0).is_ok());
        assert!(config.set_row_offset(1).is_err());
    }

    #[test]
    fn test_set_slots_clamps_offset() {
        let mut config = PanelConfiguration::new(kinds(13));
        config.set_row_offset(3).unwrap();
        config.set_slots(kinds(6));
        assert_eq!(config.row_offset(), 0);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut config = PanelConfiguration::new(kinds(12));
        config.cycle_row_offset();
        config.cycle_row_offset();
        assert_eq!(config.row_offset(), 2);
        config.cycle_row_offset();
        assert_eq!(config.row_offset(), 0);
    }

    #[test]
    fn test_zero_rows_rejected() {
        let mut config = PanelConfiguration::new(kinds(3));
        assert_eq!(config.set_max_rows(0), Err(ConfigError::ZeroRows));
        assert!(config.set_max_rows(4).is_ok());
    }
}
