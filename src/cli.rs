use clap::Parser;
use std::path::PathBuf;

use crate::cue::sheet::DEFAULT_PERFORMER;
use crate::silence::DetectionParams;

#[derive(Parser, Debug)]
#[command(
    name = "cuesplit",
    about = "Generate a CUE sheet for a continuous recording by detecting silence midpoints"
)]
pub struct Cli {
    /// Input audio file (FLAC, WAV, MP3, OGG)
    pub input: PathBuf,

    /// Silence threshold in dBFS
    #[arg(long, default_value_t = -60.0, allow_hyphen_values = true)]
    pub silence_thresh: f64,

    /// Minimum silence length in ms
    #[arg(long, default_value_t = 1000)]
    pub min_silence_len: u64,

    /// Step size in ms for analysis
    #[arg(long, default_value_t = 20)]
    pub step_ms: u64,

    /// Ignore split points within N seconds of the file end
    #[arg(long, default_value_t = 5)]
    pub min_tail_gap: u64,

    /// Output CUE file (default: <input>_generated.cue)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Performer written to the sheet and every track
    #[arg(long, default_value = DEFAULT_PERFORMER)]
    pub performer: String,

    /// Config file (default: ./cuesplit.toml or ~/.config/cuesplit/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    pub fn detection_params(&self) -> DetectionParams {
        DetectionParams {
            threshold_db: self.silence_thresh,
            min_silence_ms: self.min_silence_len,
            step_ms: self.step_ms,
            min_tail_gap_secs: self.min_tail_gap as f64,
        }
    }
}
