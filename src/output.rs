use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// `<dir>/<stem>_generated.cue` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_generated.cue", stem))
}

/// Write `contents` to `path` atomically.
///
/// The text goes to a temporary file in the destination directory which is
/// then renamed over `path`, so a failed run never leaves a truncated sheet.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
    tmp.as_file()
        .sync_all()
        .context("Failed to flush cue sheet to disk")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write cue sheet: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("/rips/side a.flac")),
            PathBuf::from("/rips/side a_generated.cue")
        );
        assert_eq!(
            default_output_path(Path::new("set.live.wav")),
            PathBuf::from("set.live_generated.cue")
        );
        assert_eq!(
            default_output_path(Path::new("noext")),
            PathBuf::from("noext_generated.cue")
        );
    }

    #[test]
    fn writes_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.cue");

        write_atomic(&path, "first").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        write_atomic(&path, "PERFORMER \"x\"\nTITLE \"y\"").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "PERFORMER \"x\"\nTITLE \"y\""
        );

        // No stray temporaries left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.cue");
        assert!(write_atomic(&path, "x").is_err());
        assert!(!path.exists());
    }
}
