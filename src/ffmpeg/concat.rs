use super::encoder::Encoder;
use crate::error::{ConcatError, Result};
use std::{
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::TempPath;

/// Escapes a path for a single-quoted concat demuxer directive.
pub fn escape_path(path: &str) -> String {
    path.replace('\'', r"'\''")
}

pub fn render(paths: &[PathBuf]) -> Result<String> {
    let mut list = String::new();
    for path in paths {
        let path = path.to_str().ok_or_else(|| {
            ConcatError::ManifestWrite(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("path is not valid UTF-8: {}", path.display()),
            ))
        })?;
        if path.contains(['\n', '\r']) {
            return Err(ConcatError::ManifestWrite(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("path contains a line break: {:?}", path),
            )));
        }
        list.push_str(&format!("file '{}'\n", escape_path(path)));
    }
    Ok(list)
}

/// Concat list file owned by a single run. The file is removed when the
/// manifest is dropped.
#[derive(Debug)]
pub struct Manifest {
    path: TempPath,
}

impl Manifest {
    pub fn create(paths: &[PathBuf]) -> Result<Self> {
        let list = render(paths)?;
        let mut file = tempfile::Builder::new()
            .prefix("concat-list-")
            .suffix(".txt")
            .tempfile()
            .map_err(ConcatError::ManifestWrite)?;
        file.write_all(list.as_bytes())
            .and_then(|_| file.flush())
            .map_err(ConcatError::ManifestWrite)?;
        log::debug!("wrote {} entries to {}", paths.len(), file.path().display());
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parameters of one concat + re-encode run.
#[derive(Debug, Clone)]
pub struct ConcatJob {
    pub resolution: String,
    pub framerate: u32,
    pub encoder: Encoder,
    pub output: PathBuf,
}

impl ConcatJob {
    pub fn video_filter(&self) -> String {
        format!("scale={},fps={}", self.resolution, self.framerate)
    }

    pub fn args(&self, manifest: &Path) -> Vec<OsString> {
        let filter = self.video_filter();
        let mut args: Vec<OsString> = ["-f", "concat", "-safe", "0", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(manifest.into());
        args.extend(
            [
                "-vf",
                filter.as_str(),
                "-c:v",
                self.encoder.as_str(),
                "-c:a",
                "aac",
                "-b:a",
                "192k",
                "-y",
            ]
            .into_iter()
            .map(OsString::from),
        );
        args.push(self.output.as_os_str().to_owned());
        args
    }
}
