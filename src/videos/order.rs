use super::VideoEntry;
use crate::error::{ConcatError, Result};
use std::path::PathBuf;

/// Sorts oldest first. The sort is stable, so entries sharing a timestamp
/// keep their scan order.
pub fn sort_by_modified(mut videos: Vec<VideoEntry>) -> Vec<VideoEntry> {
    videos.sort_by_key(|v| v.modified_at);
    videos
}

pub fn canonical_paths(videos: &[VideoEntry]) -> Result<Vec<PathBuf>> {
    videos
        .iter()
        .map(|v| {
            std::fs::canonicalize(&v.path).map_err(|source| ConcatError::PathResolution {
                path: v.path.clone(),
                source,
            })
        })
        .collect()
}
