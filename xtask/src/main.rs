use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use xshell::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for the palletcalc workspace")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let sh = Shell::new()?;
    sh.change_dir(workspace_root());

    cli.command.run(&sh)
}

/// Tasks run from the workspace root regardless of the caller's directory.
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
