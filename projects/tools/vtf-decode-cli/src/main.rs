#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Preview tool for raw VTF pixel data
struct TopLevel {
    /// log every decoded file
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Decode(commands::decode::DecodeCmd),
    Formats(commands::formats::FormatsCmd),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Decode(cmd) => {
            commands::decode::handle_decode_command(cmd)?;
        }
        Commands::Formats(cmd) => {
            commands::formats::handle_formats_command(cmd);
        }
    }

    Ok(())
}
