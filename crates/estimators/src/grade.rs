//! Rolling Road Grade Estimator
//!
//! Regresses percent grade from GPS altitude over distance: samples
//! `(cumulative_distance, altitude)` at fixed length steps into a circular
//! buffer and keeps a rolling average of the per-segment grades.

use serde::{Deserialize, Serialize};
use vehicle_state::VehicleStateSnapshot;

/// Grade estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeConfig {
    /// Circular buffer length (samples)
    pub sample_count: usize,
    /// Distance between recorded samples (m)
    pub step_len_m: f32,
    /// Minimum cumulative distance before the output is trusted (m)
    pub min_dist_m: f32,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            sample_count: 10,
            step_len_m: 5.0,
            min_dist_m: 20.0,
        }
    }
}

/// Rolling grade estimator state
///
/// The average over all buffered segment grades is maintained incrementally:
/// a full mean is computed once when the buffer first wraps, then each
/// overwrite subtracts the evicted segment's share and adds the new one.
#[derive(Debug, Clone)]
pub struct RollingGradeEstimator {
    config: GradeConfig,
    positions_m: Vec<f32>,
    altitudes_m: Vec<f32>,
    segment_grades: Vec<f32>,
    cursor: usize,
    wrapped: bool,
    pending_dist_m: f32,
    rolling_grade: f32,
    last_time_s: Option<f64>,
    fix_ok: bool,
}

impl RollingGradeEstimator {
    pub fn new(config: GradeConfig) -> Self {
        let n = config.sample_count.max(2);
        Self {
            positions_m: vec![0.0; n],
            altitudes_m: vec![0.0; n],
            segment_grades: vec![0.0; n],
            config: GradeConfig {
                sample_count: n,
                ..config
            },
            cursor: 0,
            wrapped: false,
            pending_dist_m: 0.0,
            rolling_grade: 0.0,
            last_time_s: None,
            fix_ok: false,
        }
    }

    /// Advance from the current frame's snapshot
    pub fn update(&mut self, snapshot: &VehicleStateSnapshot) {
        let now = snapshot.mono_time_s;
        let dt = match self.last_time_s {
            Some(last) => (now - last).max(0.0) as f32,
            None => {
                self.last_time_s = Some(now);
                self.fix_ok = snapshot.gps.has_fix();
                return;
            }
        };
        self.last_time_s = Some(now);

        // accuracy of exactly zero means no fix: freeze sampling entirely
        self.fix_ok = snapshot.gps.has_fix();
        if !self.fix_ok {
            return;
        }

        if snapshot.v_ego_mps > 0.0 {
            self.pending_dist_m += snapshot.v_ego_mps * dt;
            if self.pending_dist_m > self.config.step_len_m {
                self.record_sample(snapshot.gps.altitude_m as f32);
                self.pending_dist_m = 0.0;
            }
        }
    }

    fn record_sample(&mut self, altitude_m: f32) {
        let n = self.config.sample_count;
        let prev_pos = self.positions_m[self.cursor];
        self.cursor += 1;
        if self.cursor >= n {
            if !self.wrapped {
                self.wrapped = true;
                // initial mean over all pairwise segments
                let mut sum = 0.0;
                for i in 0..n {
                    let rise = self.altitudes_m[i] - self.altitudes_m[(i + 1) % n];
                    let run = self.positions_m[i] - self.positions_m[(i + 1) % n];
                    if run != 0.0 {
                        self.segment_grades[i] = rise / run * 100.0;
                    }
                    sum += self.segment_grades[i];
                }
                self.rolling_grade = sum / n as f32;
                tracing::debug!(grade = self.rolling_grade, "grade buffer wrapped");
            }
            self.cursor = 0;
        }

        self.altitudes_m[self.cursor] = altitude_m;
        self.positions_m[self.cursor] = prev_pos + self.pending_dist_m;

        if self.wrapped {
            let rise = self.altitudes_m[self.cursor] - self.altitudes_m[(self.cursor + 1) % n];
            let run = self.positions_m[self.cursor] - self.positions_m[(self.cursor + 1) % n];
            if run != 0.0 {
                let new_grade = rise / run * 100.0;
                self.rolling_grade -= self.segment_grades[self.cursor] / n as f32;
                self.rolling_grade += new_grade / n as f32;
                self.segment_grades[self.cursor] = new_grade;
            }
        }
    }

    /// Rolling percent grade, once the buffer has wrapped, enough distance is
    /// buffered, and a GPS fix is present
    pub fn grade_percent(&self) -> Option<f32> {
        if self.wrapped && self.fix_ok && self.positions_m[self.cursor] >= self.config.min_dist_m {
            Some(self.rolling_grade)
        } else {
            None
        }
    }

    #[cfg(test)]
    fn full_recompute(&self) -> f32 {
        self.segment_grades.iter().sum::<f32>() / self.config.sample_count as f32
    }
}

impl Default for RollingGradeEstimator {
    fn default() -> Self {
        Self::new(GradeConfig::default())
    }
}
