use super::signal::Signal;

/// One scan step: `[start_ms, end_ms)` and its loudness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start_ms: u64,
    pub end_ms: u64,
    pub loudness_db: f64,
}

/// Fixed-step, left-to-right walk over a [`Signal`].
///
/// The last window is clipped to the end of the signal when `step_ms` does
/// not divide the duration.
pub struct Windows<'a, S: Signal + ?Sized> {
    signal: &'a S,
    step_ms: u64,
    cursor_ms: u64,
    total_ms: u64,
}

pub fn windows<S: Signal + ?Sized>(signal: &S, step_ms: u64) -> Windows<'_, S> {
    Windows {
        signal,
        step_ms,
        cursor_ms: 0,
        total_ms: signal.duration_ms(),
    }
}

/// Number of windows a scan of `total_ms` with `step_ms` produces.
pub fn window_count(total_ms: u64, step_ms: u64) -> u64 {
    if step_ms == 0 {
        return 0;
    }
    total_ms.div_ceil(step_ms)
}

impl<S: Signal + ?Sized> Iterator for Windows<'_, S> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.step_ms == 0 || self.cursor_ms >= self.total_ms {
            return None;
        }

        let start_ms = self.cursor_ms;
        let end_ms = start_ms.saturating_add(self.step_ms).min(self.total_ms);
        self.cursor_ms = end_ms;

        Some(Window {
            start_ms,
            end_ms,
            loudness_db: self.signal.loudness_dbfs(start_ms, end_ms),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = window_count(self.total_ms.saturating_sub(self.cursor_ms), self.step_ms) as usize;
        (left, Some(left))
    }
}
