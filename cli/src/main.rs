//! ec2ops - EC2 instance operations from the terminal

use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;
use ec2ops_cli::cli::Cli;
use ec2ops_cli::commands::{FAREWELL, is_interrupt};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tokio::select! {
        biased;
        _ = tokio::signal::ctrl_c() => farewell(),
        result = cli.run() => match result {
            Ok(code) => code,
            Err(e) if is_interrupt(&e) => farewell(),
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn farewell() -> ! {
    println!();
    println!("{FAREWELL}");
    let _ = std::io::stdout().flush();
    // A prompt may still be blocked on stdin; the runtime cannot
    // shut down until it returns.
    std::process::exit(0);
}
