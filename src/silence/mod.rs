//! Silence scanning: windowed loudness in, split points out.
//!
//! [`runs::detect_runs`] walks the signal once and emits every maximal run
//! of windows below the threshold. [`split::split_points`] drops runs that
//! are too short and reduces the rest to their midpoints.

pub mod runs;
pub mod split;

use thiserror::Error;

pub const DEFAULT_THRESHOLD_DB: f64 = -60.0;
pub const DEFAULT_MIN_SILENCE_MS: u64 = 1000;
pub const DEFAULT_STEP_MS: u64 = 20;
pub const DEFAULT_MIN_TAIL_GAP_SECS: f64 = 5.0;

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("step size must be at least 1 ms")]
    ZeroStep,
    #[error("silence threshold must be a finite dBFS value, got {0}")]
    InvalidThreshold(f64),
    #[error("minimum tail gap must be a finite, non-negative number of seconds, got {0}")]
    InvalidTailGap(f64),
}

/// Tunables for one detection pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionParams {
    /// Windows strictly below this level are silent
    pub threshold_db: f64,
    /// Shortest run that still yields a split point
    pub min_silence_ms: u64,
    pub step_ms: u64,
    /// Split points this close to the end (or closer) are dropped
    pub min_tail_gap_secs: f64,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            threshold_db: DEFAULT_THRESHOLD_DB,
            min_silence_ms: DEFAULT_MIN_SILENCE_MS,
            step_ms: DEFAULT_STEP_MS,
            min_tail_gap_secs: DEFAULT_MIN_TAIL_GAP_SECS,
        }
    }
}

impl DetectionParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.step_ms == 0 {
            return Err(ParamError::ZeroStep);
        }
        if !self.threshold_db.is_finite() {
            return Err(ParamError::InvalidThreshold(self.threshold_db));
        }
        if !self.min_tail_gap_secs.is_finite() || self.min_tail_gap_secs < 0.0 {
            return Err(ParamError::InvalidTailGap(self.min_tail_gap_secs));
        }
        Ok(())
    }
}
