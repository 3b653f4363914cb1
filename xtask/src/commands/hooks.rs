use anyhow::Result;
use clap::{Args, Subcommand};
use xshell::Shell;

const PRE_COMMIT: &str = "#!/bin/sh\nexec cargo run --quiet --package xtask -- precommit\n";

#[derive(Args)]
pub struct Hooks {
    #[command(subcommand)]
    command: HooksCommand,
}

#[derive(Subcommand)]
pub enum HooksCommand {
    /// Install a pre-commit hook that runs `xtask precommit`
    Install {
        /// Replace an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },
    /// Remove the pre-commit hook
    Uninstall,
}

impl Hooks {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        let hooks_dir = sh.current_dir().join(".git/hooks");
        if !hooks_dir.exists() {
            anyhow::bail!(".git/hooks directory not found. Is this a git repository?");
        }
        let pre_commit = hooks_dir.join("pre-commit");

        match &self.command {
            HooksCommand::Install { force } => {
                if pre_commit.exists() && !force {
                    anyhow::bail!(
                        "{} already exists, pass --force to replace it",
                        pre_commit.display()
                    );
                }

                sh.write_file(&pre_commit, PRE_COMMIT)?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    let mut perms = std::fs::metadata(&pre_commit)?.permissions();
                    perms.set_mode(0o755);
                    std::fs::set_permissions(&pre_commit, perms)?;
                }

                eprintln!("Pre-commit hook installed to {}", pre_commit.display());
            }
            HooksCommand::Uninstall => {
                if pre_commit.exists() {
                    sh.remove_path(&pre_commit)?;
                    eprintln!("Removed {}", pre_commit.display());
                } else {
                    eprintln!("No pre-commit hook installed");
                }
            }
        }
        Ok(())
    }
}
