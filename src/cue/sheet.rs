//! Cue sheet model and text rendering.
//!
//! One header block (performer, title, file) followed by one block per
//! track. Titles and performers are placeholders; only the `INDEX 01`
//! timestamps carry detected information.

use std::fmt;
use std::path::Path;

use super::time::CueTime;
use crate::tracks::TrackBoundaries;

pub const DEFAULT_PERFORMER: &str = "Unknown Artist";

/// Stream type written after the file name.
const FILE_TYPE: &str = "WAVE";

#[derive(Clone, Debug, PartialEq)]
pub struct CueTrack {
    pub number: usize,
    pub title: String,
    pub performer: String,
    pub start: CueTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CueSheet {
    pub performer: String,
    pub title: String,
    pub file: String,
    pub tracks: Vec<CueTrack>,
}

impl CueSheet {
    /// Build a sheet for `audio_path` with one track per boundary start.
    pub fn new(audio_path: &Path, boundaries: &TrackBoundaries, performer: &str) -> Self {
        let file = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = audio_path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let tracks = boundaries
            .track_starts()
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let number = i + 1;
                CueTrack {
                    number,
                    title: format!("Track {:02}", number),
                    performer: performer.to_string(),
                    start: CueTime::from_secs(start),
                }
            })
            .collect();

        Self {
            performer: performer.to_string(),
            title,
            file,
            tracks,
        }
    }

    /// One directive per element, in file order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3 + self.tracks.len() * 4);
        lines.push(format!("PERFORMER \"{}\"", self.performer));
        lines.push(format!("TITLE \"{}\"", self.title));
        lines.push(format!("FILE \"{}\" {}", self.file, FILE_TYPE));

        for track in &self.tracks {
            lines.push(format!("  TRACK {:02} AUDIO", track.number));
            lines.push(format!("    TITLE \"{}\"", track.title));
            lines.push(format!("    PERFORMER \"{}\"", track.performer));
            lines.push(format!("    INDEX 01 {}", track.start));
        }

        lines
    }

    /// Newline-joined sheet, no trailing newline.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for CueSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
