use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use dmg_backdrop::{BackgroundComposer, Canvas, FontStack, encode};

/// Render the DMG installer background PNG.
#[derive(Parser, Debug)]
#[command(name = "dmg-backdrop", version)]
struct Cli {
    /// Output PNG path. Its parent directory is created if missing.
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version keep clap's stream handling; invocation
            // mistakes report their usage message on stdout.
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                err.exit();
            }
            print!("{err}");
            std::process::exit(2);
        }
    };

    let fonts = FontStack::default_macos().resolve();
    let composer = BackgroundComposer::new(Canvas::dmg_default(), fonts)
        .context("set up background composer")?;
    let frame = composer.compose().context("compose background")?;

    encode::ensure_parent_dir(&cli.out)?;
    encode::write_png(&frame, &cli.out)?;

    println!("wrote {}", cli.out.display());
    Ok(())
}
