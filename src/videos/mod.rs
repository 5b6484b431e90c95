use std::{path::PathBuf, time::SystemTime};

pub mod order;
pub mod scan;

/// Container formats picked up by the scanner, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["mp4", "mov", "mkv", "avi"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub path: PathBuf,
    pub modified_at: SystemTime,
}

impl VideoEntry {
    pub fn new(path: PathBuf, modified_at: SystemTime) -> Self {
        Self { path, modified_at }
    }
}
