use crate::audio::signal::Signal;
use crate::audio::window::{windows, Window};

/// Maximal stretch of silent windows, `[start_ms, end_ms)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SilenceRun {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl SilenceRun {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    /// Temporal midpoint in seconds.
    pub fn midpoint_secs(&self) -> f64 {
        (self.start_ms + self.end_ms) as f64 / 2000.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum RunState {
    Idle,
    Open { start_ms: u64, end_ms: u64 },
}

impl RunState {
    /// Advance by one classified window, possibly closing a run.
    fn step(self, window: &Window, silent: bool) -> (RunState, Option<SilenceRun>) {
        match (self, silent) {
            (RunState::Idle, true) => (
                RunState::Open {
                    start_ms: window.start_ms,
                    end_ms: window.end_ms,
                },
                None,
            ),
            (RunState::Open { start_ms, .. }, true) => (
                RunState::Open {
                    start_ms,
                    end_ms: window.end_ms,
                },
                None,
            ),
            (RunState::Open { start_ms, end_ms }, false) => {
                (RunState::Idle, Some(SilenceRun { start_ms, end_ms }))
            }
            (RunState::Idle, false) => (RunState::Idle, None),
        }
    }

    /// Close whatever is still open at end of signal.
    fn finish(self) -> Option<SilenceRun> {
        match self {
            RunState::Open { start_ms, end_ms } => Some(SilenceRun { start_ms, end_ms }),
            RunState::Idle => None,
        }
    }
}

/// Scan `signal` once in `step_ms` windows and collect every silence run.
///
/// A window is silent when its loudness is strictly below `threshold_db`.
/// `observe` sees each window after it is classified; it cannot influence
/// the result. Runs are returned in scan order, before any length filter.
pub fn detect_runs<S, F>(signal: &S, threshold_db: f64, step_ms: u64, mut observe: F) -> Vec<SilenceRun>
where
    S: Signal + ?Sized,
    F: FnMut(&Window),
{
    let mut runs = Vec::new();
    let mut state = RunState::Idle;

    for window in windows(signal, step_ms) {
        let (next, closed) = state.step(&window, window.loudness_db < threshold_db);
        state = next;
        if let Some(run) = closed {
            log::debug!("Silence run {}ms - {}ms", run.start_ms, run.end_ms);
            runs.push(run);
        }
        observe(&window);
    }

    if let Some(run) = state.finish() {
        log::debug!("Trailing silence run {}ms - {}ms", run.start_ms, run.end_ms);
        runs.push(run);
    }

    runs
}
