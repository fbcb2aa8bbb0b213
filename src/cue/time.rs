use std::fmt;

/// CD-audio frames per second, the resolution of `INDEX` timestamps.
pub const FRAMES_PER_SECOND: u64 = 75;

/// Cue sheet timestamp, `mm:ss:ff`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CueTime {
    pub minutes: u64,
    pub seconds: u64,
    pub frames: u64,
}

impl CueTime {
    /// Round `secs` to the nearest frame, ties to even.
    pub fn from_secs(secs: f64) -> Self {
        let total_frames = (secs.max(0.0) * FRAMES_PER_SECOND as f64).round_ties_even() as u64;
        Self::from_frames(total_frames)
    }

    pub fn from_frames(total_frames: u64) -> Self {
        Self {
            minutes: total_frames / (60 * FRAMES_PER_SECOND),
            seconds: (total_frames / FRAMES_PER_SECOND) % 60,
            frames: total_frames % FRAMES_PER_SECOND,
        }
    }

    pub fn total_frames(&self) -> u64 {
        (self.minutes * 60 + self.seconds) * FRAMES_PER_SECOND + self.frames
    }
}

impl fmt::Display for CueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(CueTime::from_secs(0.0).to_string(), "00:00:00");
    }

    #[test]
    fn exact_frame_values() {
        let t = CueTime::from_secs(3.6);
        assert_eq!(t.total_frames(), 270);
        assert_eq!(t.to_string(), "00:03:45");

        assert_eq!(CueTime::from_secs(61.0).to_string(), "01:01:00");
        assert_eq!(CueTime::from_secs(59.0 + 74.0 / 75.0).to_string(), "00:59:74");
    }

    #[test]
    fn rounds_to_nearest_frame() {
        // 0.5 s and 1.5 s land exactly on half frames: ties go to even
        assert_eq!(CueTime::from_secs(0.5).total_frames(), 38);
        assert_eq!(CueTime::from_secs(1.5).total_frames(), 112);
        assert_eq!(CueTime::from_secs(0.02).total_frames(), 2);
        assert_eq!(CueTime::from_secs(0.0199).total_frames(), 1);
    }

    #[test]
    fn minutes_are_not_wrapped() {
        let t = CueTime::from_secs(2.0 * 3600.0 + 5.0);
        assert_eq!(t.to_string(), "120:05:00");
    }

    #[test]
    fn frames_roundtrip() {
        for frames in [0, 1, 74, 75, 4499, 4500, 123_456] {
            assert_eq!(CueTime::from_frames(frames).total_frames(), frames);
        }
    }
}
