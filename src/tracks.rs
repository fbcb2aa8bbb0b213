/// Ordered track boundaries in seconds.
///
/// Every element but the last is a track start; the last is the end of the
/// recording. The list always starts at 0.0 and holds at least two values.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackBoundaries {
    points: Vec<f64>,
}

impl TrackBoundaries {
    /// Turn sorted split points into track boundaries.
    ///
    /// Split points within `min_tail_gap_secs` of the end (inclusive) are
    /// dropped. The remainder is merged with 0.0, deduplicated and sorted,
    /// then `total_secs` is appended unless it is already the last value.
    /// A zero-length recording gives `[0.0, 0.0]`.
    pub fn build(total_secs: f64, split_points: &[f64], min_tail_gap_secs: f64) -> Self {
        let mut points: Vec<f64> = std::iter::once(0.0)
            .chain(
                split_points
                    .iter()
                    .copied()
                    .filter(|&p| total_secs - p > min_tail_gap_secs),
            )
            .collect();
        points.sort_by(f64::total_cmp);
        points.dedup();

        if points.len() == 1 || points.last() != Some(&total_secs) {
            points.push(total_secs);
        }

        Self { points }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Start time of every track, in order.
    pub fn track_starts(&self) -> &[f64] {
        &self.points[..self.points.len() - 1]
    }

    pub fn track_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn total_secs(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}
