use crate::audio::signal::Signal;
use crate::audio::window::Window;
use crate::silence::{runs, split, DetectionParams};
use crate::tracks::TrackBoundaries;

/// Signal to track boundaries: scan, filter, midpoint, build.
pub fn find_track_boundaries<S, F>(signal: &S, params: &DetectionParams, observe: F) -> TrackBoundaries
where
    S: Signal + ?Sized,
    F: FnMut(&Window),
{
    let runs = runs::detect_runs(signal, params.threshold_db, params.step_ms, observe);
    log::info!("Found {} silence run(s)", runs.len());

    let points = split::split_points(&runs, params.min_silence_ms);
    log::debug!("Split points: {:?}", points);

    let boundaries = TrackBoundaries::build(signal.duration_secs(), &points, params.min_tail_gap_secs);
    let dropped = points.len() + 1 - boundaries.track_count();
    if dropped > 0 {
        log::debug!("Dropped {} split point(s) near the end or duplicated", dropped);
    }
    log::debug!("Track boundaries: {:?}", boundaries.as_slice());
    boundaries
}
