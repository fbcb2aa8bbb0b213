mod audio;
mod cli;
mod config;
mod cue;
mod output;
mod pipeline;
mod silence;
mod tracks;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use audio::signal::Signal;
use audio::window::window_count;
use cli::Cli;
use cue::sheet::{CueSheet, DEFAULT_PERFORMER};
use silence::{DEFAULT_MIN_SILENCE_MS, DEFAULT_MIN_TAIL_GAP_SECS, DEFAULT_STEP_MS, DEFAULT_THRESHOLD_DB};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    // Config values apply only where the CLI is still at its default
    if let Some(path) = config::find_config(cli.config.as_deref()) {
        if let Some(cfg) = config::load_config(&path) {
            log::info!("Loaded config from {}", path.display());
            if cli.silence_thresh == DEFAULT_THRESHOLD_DB { cli.silence_thresh = cfg.detection.silence_thresh; }
            if cli.min_silence_len == DEFAULT_MIN_SILENCE_MS { cli.min_silence_len = cfg.detection.min_silence_len; }
            if cli.step_ms == DEFAULT_STEP_MS { cli.step_ms = cfg.detection.step_ms; }
            if cli.min_tail_gap as f64 == DEFAULT_MIN_TAIL_GAP_SECS { cli.min_tail_gap = cfg.detection.min_tail_gap; }
            if cli.performer == DEFAULT_PERFORMER { cli.performer = cfg.cue.performer; }
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }

    let params = cli.detection_params();
    params.validate().context("Invalid detection parameters")?;

    let input = &cli.input;
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    log::info!("Loading {}", input.display());
    let audio_data = audio::decode::decode_audio(input)?;

    log::info!(
        "Detecting silences: below {} dB, >= {} ms, step {} ms",
        params.threshold_db,
        params.min_silence_ms,
        params.step_ms
    );

    let pb = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(window_count(audio_data.duration_ms(), params.step_ms))
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} windows ({eta} remaining)")?
            .progress_chars("=>-"),
    );

    let boundaries = pipeline::find_track_boundaries(&audio_data, &params, |_| pb.inc(1));
    pb.finish_and_clear();

    log::info!(
        "Detected {} track(s) over {:.1}s",
        boundaries.track_count(),
        boundaries.total_secs()
    );

    let sheet = CueSheet::new(input, &boundaries, &cli.performer);
    for track in &sheet.tracks {
        log::debug!("Track {:02} at {} ({} frames)", track.number, track.start, track.start.total_frames());
    }
    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(input));
    output::write_atomic(&output_path, &sheet.render())?;

    log::info!("CUE file generated: {}", output_path.display());
    Ok(())
}
