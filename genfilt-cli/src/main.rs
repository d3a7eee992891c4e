use clap::Parser;
use genfilt_cli::commands::{Commands, GlobalArgs};
use std::process::ExitCode;

/// Gender-based filtering of corpora for MT self-training
#[derive(Debug, Parser)]
#[command(name = "genfilt", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute(&cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
