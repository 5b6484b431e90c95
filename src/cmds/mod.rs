use self::concat::{ConcatArgs, ConcatCommand};
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;

pub mod concat;

/// Concatenate every video under a directory, oldest first, into one file.
#[derive(Debug, clap::Parser)]
#[command(name = "vidconcat", version)]
pub struct VidconcatCli {
    #[command(flatten)]
    pub concat: ConcatArgs,

    /// print debug logs
    #[arg(short, long)]
    pub verbose: bool,
}

/// Long flags that may be spelled with a single dash (`-dir`).
const LONG_FLAGS: [&str; 9] = [
    "dir",
    "output",
    "resolution",
    "framerate",
    "encoder",
    "ffmpeg",
    "dry-run",
    "verbose",
    "help",
];

/// Rewrites `-dir x` / `-dir=x` into `--dir x` / `--dir=x` for known long flags.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = vec![];
    let mut only_positional = false;
    for arg in args {
        if only_positional {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            only_positional = true;
        }
        let rewritten = arg.to_str().and_then(|s| {
            let name = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = name.split('=').next().unwrap_or(name);
            LONG_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("-{}", s)))
        });
        normalized.push(rewritten.unwrap_or(arg));
    }
    normalized
}

pub fn parse_cli() -> VidconcatCli {
    VidconcatCli::parse_from(normalize_args(std::env::args_os()))
}

pub fn handle_commands(cli: VidconcatCli) -> Result<()> {
    let cmd = ConcatCommand::new(cli.concat);
    cmd.execute()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffmpeg::encoder::{Encoder, Platform};

    fn args(v: &[&str]) -> Vec<OsString> {
        v.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_normalize_single_dash() {
        let got = normalize_args(args(&[
            "vidconcat",
            "-dir",
            "clips",
            "-output=out.mp4",
            "-framerate",
            "30",
            "-v",
        ]));
        assert_eq!(
            got,
            args(&[
                "vidconcat",
                "--dir",
                "clips",
                "--output=out.mp4",
                "--framerate",
                "30",
                "-v"
            ])
        );
    }

    #[test]
    fn test_normalize_leaves_values_and_unknowns() {
        let input = args(&["vidconcat", "--dir", "-x", "-dirty", "--", "-output"]);
        let got = normalize_args(input.clone());
        assert_eq!(got, input);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = VidconcatCli::try_parse_from(normalize_args(args(&[
            "vidconcat",
            "-dir",
            "clips",
            "-output",
            "out.mp4",
        ])))
        .unwrap();
        assert_eq!(cli.concat.dir.to_str(), Some("clips"));
        assert_eq!(cli.concat.output.to_str(), Some("out.mp4"));
        assert_eq!(cli.concat.resolution, "1920x1080");
        assert_eq!(cli.concat.framerate, 60);
        assert_eq!(cli.concat.encoder, None);
        assert!(!cli.concat.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_single_and_double_dash_agree() {
        let single = VidconcatCli::try_parse_from(normalize_args(args(&[
            "vidconcat",
            "-dir",
            "d",
            "-output",
            "o.mkv",
            "-encoder",
            "libx264",
            "-resolution",
            "1280x720",
        ])))
        .unwrap();
        let double = VidconcatCli::try_parse_from(args(&[
            "vidconcat",
            "--dir",
            "d",
            "--output",
            "o.mkv",
            "--encoder",
            "libx264",
            "--resolution",
            "1280x720",
        ]))
        .unwrap();
        assert_eq!(format!("{:?}", single), format!("{:?}", double));
        assert_eq!(single.concat.encoder.as_deref(), Some("libx264"));
    }

    #[test]
    fn test_single_dash_help() {
        let normalized = normalize_args(args(&["vidconcat", "-help"]));
        assert_eq!(normalized, args(&["vidconcat", "--help"]));
        let err = VidconcatCli::try_parse_from(normalized).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_empty_dir_and_output_rejected() {
        for argv in [
            ["vidconcat", "-dir", "", "-output", "o.mp4"],
            ["vidconcat", "-dir", "d", "-output", ""],
        ] {
            let err = VidconcatCli::try_parse_from(normalize_args(args(&argv))).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_empty_encoder_falls_back_to_default() {
        let cli = VidconcatCli::try_parse_from(normalize_args(args(&[
            "vidconcat",
            "-dir",
            "d",
            "-output",
            "o.mp4",
            "-encoder",
            "",
        ])))
        .unwrap();
        let encoder = Encoder::resolve(cli.concat.encoder, Platform::MacOs);
        assert_eq!(encoder.as_str(), "hevc_videotoolbox");
    }

    #[test]
    fn test_missing_required() {
        let err = VidconcatCli::try_parse_from(normalize_args(args(&["vidconcat", "-dir", "d"])))
            .unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
