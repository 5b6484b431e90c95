use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConcatError {
    #[error("`{program}` not found in PATH, install ffmpeg and add it to PATH")]
    ToolNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to scan {}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to resolve absolute path of {}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write concat list file")]
    ManifestWrite(#[source] io::Error),

    #[error("no video files found in {}", .dir.display())]
    NoVideos { dir: PathBuf },

    #[error("ffmpeg failed: {}", describe_status(.status))]
    ToolExecution {
        status: Option<i32>,
        #[source]
        source: Option<io::Error>,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "not started or terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, ConcatError>;
