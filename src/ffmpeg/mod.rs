use crate::error::{ConcatError, Result};
use std::{
    ffi::OsString,
    path::PathBuf,
    process::Command,
};

pub mod concat;
pub mod encoder;

pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// A resolved ffmpeg executable.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Ffmpeg {
    /// Looks `program` up in PATH. A program given with a directory part is
    /// checked as is.
    pub fn locate(program: &str) -> Result<Self> {
        let program_path = which::which(program).map_err(|source| ConcatError::ToolNotFound {
            program: program.to_string(),
            source,
        })?;
        log::debug!("using {}", program_path.display());
        Ok(Self {
            program: program_path,
        })
    }

    /// Runs ffmpeg to completion. stdout and stderr are inherited so its
    /// output shows up live on the console.
    pub fn run(&self, args: &[OsString]) -> Result<()> {
        log::debug!("{} {:?}", self.program.display(), args);
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| ConcatError::ToolExecution {
                status: None,
                source: Some(source),
            })?;
        if !status.success() {
            return Err(ConcatError::ToolExecution {
                status: status.code(),
                source: None,
            });
        }
        Ok(())
    }

    pub fn command_line(&self, args: &[OsString]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().map(|a| a.as_os_str()))
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
