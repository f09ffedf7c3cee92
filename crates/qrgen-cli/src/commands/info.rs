use anyhow::{Context, Result};
use clap::Args;
use qrgen_core::encode::symbol_info;
use qrgen_core::save::derive_filename;
use qrgen_core::settings::Settings;

#[derive(Args)]
pub struct InfoArgs {
    /// Text to inspect
    pub text: String,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let settings = Settings::default();
    let info = symbol_info(&args.text).context("Failed to encode text")?;
    let side = info.pixel_size(&settings)?;

    println!("Characters:  {}", args.text.chars().count());
    println!("Bytes:       {}", args.text.len());
    println!("Symbol:      {info}");
    println!("Image size:  {side}x{side} px");
    println!(
        "File name:   {}",
        settings.output_dir.join(derive_filename(&args.text)).display()
    );

    Ok(())
}
