use anyhow::Result;
use clap::Args;
use xshell::Shell;

use super::common;

#[derive(Args)]
pub struct Precommit {
    /// Skip the report snapshot tests
    #[arg(long)]
    skip_snapshots: bool,
}

impl Precommit {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        common::run_fmt_check(sh)?;
        common::run_clippy(sh)?;

        if !self.skip_snapshots {
            common::run_snapshot_check(sh)?;
        }

        eprintln!("Precommit checks passed!");
        Ok(())
    }
}
