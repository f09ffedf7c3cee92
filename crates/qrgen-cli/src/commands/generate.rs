use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use qrgen_core::session::{Action, Outcome, Session};
use qrgen_core::settings::{Settings, DEFAULT_OUTPUT_DIR};
use tracing::debug;

use crate::summary::print_saved;

#[derive(Args)]
pub struct GenerateArgs {
    /// Text to encode
    pub text: String,

    /// Directory the PNG is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    if args.text.is_empty() {
        anyhow::bail!("Nothing to encode: text is empty");
    }

    let mut session = Session::new(Settings::default().with_output_dir(&args.output_dir));
    session.text = args.text.clone();

    let generated = session
        .dispatch(Action::Generate)
        .context("Failed to generate QR code")?;
    debug!(?generated, "Generate finished");
    let outcome = session
        .dispatch(Action::Save)
        .with_context(|| format!("Failed to save QR code to {}", args.output_dir.display()))?;

    match outcome {
        Outcome::Saved(path) => {
            debug!(path = %path.display(), "Save finished");
            print_saved(&path, session.holder().current().map(|img| img.image().dimensions()));
            Ok(())
        }
        other => anyhow::bail!("QR code was not saved: {other:?}"),
    }
}
