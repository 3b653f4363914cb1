use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Calc(args) => args.run(),
        Command::Params(args) => args.run(),
        Command::Serve(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(
    name = "palletcalc",
    about = "Cycle time and throughput of pallet transfer machines"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate one cycle and print or export the report.
    Calc(cli::calc::CalcArgs),
    /// Print the default parameter file.
    Params(cli::params::ParamsArgs),
    /// Serve the calculator over HTTP.
    Serve(cli::serve::ServeArgs),
}
