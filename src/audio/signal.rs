use super::decode::AudioData;
use super::level;

/// Read-only view of a decoded recording, addressed in milliseconds.
pub trait Signal {
    /// Total length in whole milliseconds.
    fn duration_ms(&self) -> u64;

    /// RMS loudness of `[start_ms, end_ms)` in dBFS, clipped to the signal.
    ///
    /// Ranges without any energy report [`level::SILENCE_FLOOR_DB`].
    fn loudness_dbfs(&self, start_ms: u64, end_ms: u64) -> f64;

    fn duration_secs(&self) -> f64 {
        self.duration_ms() as f64 / 1000.0
    }
}

impl AudioData {
    fn frame_at_ms(&self, ms: u64) -> usize {
        let frame = ms as u128 * self.sample_rate as u128 / 1000;
        (frame.min(usize::MAX as u128) as usize).min(self.frames())
    }
}

impl Signal for AudioData {
    fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.frames() as f64 * 1000.0 / self.sample_rate as f64).round() as u64
    }

    fn loudness_dbfs(&self, start_ms: u64, end_ms: u64) -> f64 {
        let start = self.frame_at_ms(start_ms);
        let end = self.frame_at_ms(end_ms).max(start);
        let block = &self.samples[start * self.channels..end * self.channels];
        level::dbfs(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(sample_rate: u32, samples: Vec<f32>) -> AudioData {
        AudioData {
            samples,
            sample_rate,
            channels: 1,
        }
    }

    #[test]
    fn duration_rounds_to_millis() {
        assert_eq!(mono(44100, vec![0.0; 44100]).duration_ms(), 1000);
        // 22 frames at 44.1kHz is 0.4989 ms
        assert_eq!(mono(44100, vec![0.0; 22]).duration_ms(), 0);
        assert_eq!(mono(44100, vec![0.0; 23]).duration_ms(), 1);
        assert_eq!(mono(8000, Vec::new()).duration_ms(), 0);
        assert!((mono(1000, vec![0.0; 2500]).duration_secs() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn loudness_of_sub_ranges() {
        let mut samples = vec![0.0f32; 1000];
        samples.extend(vec![0.5f32; 1000]);
        let audio = mono(1000, samples);

        assert_eq!(audio.loudness_dbfs(0, 1000), level::SILENCE_FLOOR_DB);
        assert!((audio.loudness_dbfs(1000, 2000) - (-6.0206)).abs() < 1e-3);
        // Range past the end is clipped
        assert!((audio.loudness_dbfs(1990, 2020) - (-6.0206)).abs() < 1e-3);
        assert_eq!(audio.loudness_dbfs(5000, 6000), level::SILENCE_FLOOR_DB);
    }

    #[test]
    fn loudness_covers_all_channels() {
        // Left silent, right loud: energy still counts
        let samples = [0.0f32, 0.5].repeat(500);
        let audio = AudioData {
            samples,
            sample_rate: 1000,
            channels: 2,
        };
        let expected = 20.0 * (0.125f64).sqrt().log10();
        assert!((audio.loudness_dbfs(0, 500) - expected).abs() < 1e-6);
    }
}
