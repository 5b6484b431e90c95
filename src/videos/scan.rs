use super::{VideoEntry, SUPPORTED_EXTENSIONS};
use crate::error::{ConcatError, Result};
use std::path::Path;
use walkdir::WalkDir;

pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Recursively collects supported video files under `dir`.
///
/// Entries are visited in file name order within each directory so the
/// returned order is reproducible across runs. Symlinks are not followed.
pub fn scan_videos(dir: &Path) -> Result<Vec<VideoEntry>> {
    let walk_err = |e: walkdir::Error| ConcatError::Scan {
        path: e.path().unwrap_or(dir).to_path_buf(),
        source: e.into(),
    };

    let mut videos = vec![];
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(walk_err)?;
        if entry.file_type().is_dir() || !is_supported_video(entry.path()) {
            continue;
        }
        let modified_at = entry
            .metadata()
            .map_err(walk_err)?
            .modified()
            .map_err(|source| ConcatError::Scan {
                path: entry.path().to_path_buf(),
                source,
            })?;
        log::debug!("found {}", entry.path().display());
        videos.push(VideoEntry::new(entry.into_path(), modified_at));
    }
    Ok(videos)
}
