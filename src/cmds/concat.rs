use crate::{
    error::{ConcatError, Result},
    ffmpeg::{
        concat::{ConcatJob, Manifest},
        encoder::{Encoder, Platform},
        Ffmpeg, DEFAULT_PROGRAM,
    },
    videos::{
        order::{canonical_paths, sort_by_modified},
        scan::scan_videos,
        VideoEntry,
    },
};
use chrono::{DateTime, Local};
use comfy_table::Table;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct ConcatArgs {
    /// directory searched recursively for videos
    #[arg(long, value_parser = non_empty_path)]
    pub dir: PathBuf,
    /// output file, overwritten if it exists
    #[arg(long, value_parser = non_empty_path)]
    pub output: PathBuf,
    #[arg(long, default_value = "1920x1080")]
    pub resolution: String,
    #[arg(long, default_value_t = 60)]
    pub framerate: u32,
    /// video encoder (defaults to hevc_nvenc on Windows, hevc_videotoolbox on macOS, libx265 elsewhere)
    #[arg(long)]
    pub encoder: Option<String>,
    #[arg(long, env = "VIDCONCAT_FFMPEG", default_value = DEFAULT_PROGRAM)]
    pub ffmpeg: String,
    /// list the videos in order and print the ffmpeg command without running it
    #[arg(long)]
    pub dry_run: bool,
}

fn non_empty_path(value: &str) -> std::result::Result<PathBuf, String> {
    if value.is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(PathBuf::from(value))
}

#[derive(Debug)]
pub struct ConcatCommand {
    args: ConcatArgs,
    platform: Platform,
}

impl ConcatCommand {
    pub fn new(args: ConcatArgs) -> Self {
        Self {
            args,
            platform: Platform::current(),
        }
    }

    /// ffmpeg is located before anything touches the filesystem. The concat
    /// list only lives for the duration of this call.
    pub fn execute(&self) -> Result<()> {
        let ffmpeg = Ffmpeg::locate(&self.args.ffmpeg)?;

        log::info!("searching videos in {}", self.args.dir.display());
        let videos = scan_videos(&self.args.dir)?;
        if videos.is_empty() {
            return Err(ConcatError::NoVideos {
                dir: self.args.dir.clone(),
            });
        }
        log::info!("found {} videos", videos.len());

        let videos = sort_by_modified(videos);
        let paths = canonical_paths(&videos)?;
        let manifest = Manifest::create(&paths)?;

        let encoder = Encoder::resolve(self.args.encoder.clone(), self.platform);
        log::info!("encoder: {}", encoder);

        let job = ConcatJob {
            resolution: self.args.resolution.clone(),
            framerate: self.args.framerate,
            encoder,
            output: self.args.output.clone(),
        };
        let ffmpeg_args = job.args(manifest.path());

        if self.args.dry_run {
            print_videos(&videos, &paths);
            println!("{}", ffmpeg.command_line(&ffmpeg_args));
            return Ok(());
        }

        log::info!("concatenating into {}", job.output.display());
        ffmpeg.run(&ffmpeg_args)?;
        log::info!("done: {}", job.output.display());
        Ok(())
    }
}

fn print_videos(videos: &[VideoEntry], paths: &[PathBuf]) {
    let mut table = Table::new();
    table.set_header(vec!["#", "modified", "path"]);
    for (i, (video, path)) in videos.iter().zip(paths).enumerate() {
        let modified: DateTime<Local> = video.modified_at.into();
        table.add_row(vec![
            (i + 1).to_string(),
            modified.format("%Y-%m-%d %H:%M:%S").to_string(),
            path.display().to_string(),
        ]);
    }
    println!("{}", table);
}
