//! Config file byte inspector - main entry point.
//!
//! Prints the first bytes of a configuration file in escaped form, its total
//! length, and whether it starts with the UTF-8 byte-order marker.

use clap::Parser;
use std::path::PathBuf;

use minecode_client::inspect;

#[derive(Parser, Debug)]
#[command(
    name = "inspect-config",
    version,
    about = "Print raw byte characteristics of a configuration file"
)]
struct Cli {
    /// File to inspect
    #[arg(default_value = "Cargo.toml")]
    path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    minecode_client::observability::init_tracing();

    let cli = Cli::parse();
    let report = inspect::inspect_file(&cli.path)?;
    report.write_to(&mut std::io::stdout())?;

    Ok(())
}
