use anyhow::Result;

mod cmds;
mod error;
mod ffmpeg;
mod videos;

fn main() -> Result<()> {
    let cli = cmds::parse_cli();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::SimpleLogger::init(level, Default::default())?;

    cmds::handle_commands(cli)?;
    Ok(())
}
