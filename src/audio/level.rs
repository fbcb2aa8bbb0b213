/// Level reported for a range with no signal energy at all.
pub const SILENCE_FLOOR_DB: f64 = -100.0;

/// Root mean square of a block of samples (full scale 1.0).
pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_squares: f64 = samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
    (sum_squares / samples.len() as f64).sqrt()
}

/// Convert an RMS value to dBFS.
///
/// Zero energy maps to [`SILENCE_FLOOR_DB`] instead of negative infinity.
pub fn rms_to_dbfs(rms: f64) -> f64 {
    if rms > 0.0 {
        20.0 * rms.log10()
    } else {
        SILENCE_FLOOR_DB
    }
}

/// RMS level of `samples` in dBFS.
pub fn dbfs(samples: &[f32]) -> f64 {
    rms_to_dbfs(rms(samples))
}
