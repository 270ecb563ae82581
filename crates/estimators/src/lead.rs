//! Lead Screen-Position Averager
//!
//! Sliding-window mean over the lead chevron's projected screen position,
//! used to keep the on-screen annotation from jittering frame to frame.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Averager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadAveragerConfig {
    /// Window length (frames)
    pub window_size: usize,
    /// Positions below this line are clamped to it (px)
    pub max_y: i32,
}

impl Default for LeadAveragerConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            max_y: 1000,
        }
    }
}

/// Rolling screen-position averager
#[derive(Debug, Clone)]
pub struct LeadPositionAverager {
    window: VecDeque<(i32, i32)>,
    window_size: usize,
    max_y: i32,
}

impl LeadPositionAverager {
    pub fn new(config: LeadAveragerConfig) -> Self {
        let window_size = config.window_size.max(1);
        Self {
            window: VecDeque::with_capacity(window_size),
            window_size,
            max_y: config.max_y,
        }
    }

    /// Record this frame's projected position
    pub fn push(&mut self, x: i32, y: i32) {
        self.window.push_back((x, y.min(self.max_y)));
        while self.window.len() > self.window_size {
            self.window.pop_front();
        }
    }

    /// Mean of the current window
    pub fn average(&self) -> Option<(i32, i32)> {
        if self.window.is_empty() {
            return None;
        }
        let n = self.window.len() as i64;
        let (sx, sy) = self
            .window
            .iter()
            .fold((0i64, 0i64), |(sx, sy), &(x, y)| (sx + x as i64, sy + y as i64));
        Some(((sx / n) as i32, (sy / n) as i32))
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl Default for LeadPositionAverager {
    fn default() -> Self {
        Self::new(LeadAveragerConfig::default())
    }
}
