use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use xshell::{Shell, cmd};

use super::common;

#[derive(Args)]
pub struct Samples {
    /// Where to write the rendered reports
    #[arg(long, default_value = "target/samples")]
    out_dir: PathBuf,
}

impl Samples {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        let mut machines = sh
            .read_dir(common::TEST_DATA)
            .with_context(|| format!("failed to list {}", common::TEST_DATA))?
            .into_iter()
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("toml"))
            .collect::<Vec<_>>();
        machines.sort();

        if machines.is_empty() {
            anyhow::bail!("no machine files found in {}", common::TEST_DATA);
        }

        cmd!(sh, "cargo build --package palletcalc").run()?;

        for machine in &machines {
            let stem = machine
                .file_stem()
                .and_then(|s| s.to_str())
                .context("machine file name is not UTF-8")?;
            // palletcalc adds the extension for each format
            let output = self.out_dir.join(stem);
            for format in ["text", "csv", "json"] {
                cmd!(
                    sh,
                    "cargo run --quiet --package palletcalc -- calc {machine} --format {format} --output {output}"
                )
                .run()?;
            }
        }

        eprintln!(
            "Rendered {} machines to {}",
            machines.len(),
            self.out_dir.display()
        );
        Ok(())
    }
}
