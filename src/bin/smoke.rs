//! MineCode smoke-test client - main entry point.
//!
//! Spawns the MineCode server, lists its tools, and runs the fixed six-call
//! script, printing each result to stdout.

use clap::Parser;
use std::path::PathBuf;

use minecode_client::channel::StdioChannel;
use minecode_client::{runner, ServerLaunchConfig};

#[derive(Parser, Debug)]
#[command(
    name = "minecode-smoke",
    version,
    about = "Run the fixed tool-call smoke test against the MineCode server"
)]
struct Cli {
    /// Executable that serves the tool protocol
    #[arg(long, env = "MINECODE_SERVER_COMMAND", default_value = "python3")]
    command: String,

    /// Argument passed to the server executable (repeatable)
    #[arg(long = "arg", default_values_t = ["server.py".to_string()])]
    args: Vec<String>,

    /// Working directory for the server process
    #[arg(long)]
    cwd: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    minecode_client::observability::init_tracing();

    let cli = Cli::parse();
    let config = ServerLaunchConfig {
        command: cli.command,
        args: cli.args,
        cwd: cli.cwd,
    };

    tracing::info!("🚀 spawning MineCode server: {} {}", config.command, config.args.join(" "));
    let mut channel = StdioChannel::spawn(&config)?;

    let mut stdout = std::io::stdout();
    runner::run_smoke_test(&mut channel, &mut stdout).await?;

    let status = channel.shutdown().await?;
    tracing::debug!("server exited: {status}");

    Ok(())
}
