use anyhow::Result;
use clap::Parser;
use droplet_icon::icon_gen::{self, IconConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "droplet-icon",
    about = "Render the droplet app icon as 192x192 and 512x512 PNG files"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = IconConfig {
        output: args.output,
        ..IconConfig::default()
    };

    icon_gen::generate_icons(&config)
}
