use super::runs::SilenceRun;

/// Midpoints (seconds) of every run lasting at least `min_silence_ms`.
///
/// Applies to the trailing run as well; input order is kept, so the result
/// is sorted when the runs come from a single scan.
pub fn split_points(runs: &[SilenceRun], min_silence_ms: u64) -> Vec<f64> {
    runs.iter()
        .filter(|run| run.duration_ms() >= min_silence_ms)
        .map(SilenceRun::midpoint_secs)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(start_ms: u64, end_ms: u64) -> SilenceRun {
        SilenceRun { start_ms, end_ms }
    }

    #[test]
    fn keeps_runs_at_or_above_minimum() {
        let runs = [run(0, 999), run(2000, 3000), run(5000, 6500)];
        assert_eq!(split_points(&runs, 1000), vec![2.5, 5.75]);
    }

    #[test]
    fn trailing_run_is_filtered_too() {
        let runs = [run(3000, 4200), run(9500, 10_000)];
        assert_eq!(split_points(&runs, 1000), vec![3.6]);
    }

    #[test]
    fn zero_minimum_keeps_everything() {
        let runs = [run(0, 20), run(100, 140)];
        assert_eq!(split_points(&runs, 0), vec![0.01, 0.12]);
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert!(split_points(&[], 1000).is_empty());
    }
}
