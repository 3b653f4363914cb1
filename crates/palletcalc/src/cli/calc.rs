use anyhow::Result;
use clap::Args;
use palletcalc::{calc, config::Config};
use palletcalc_report::OutputFormat;
use std::path::PathBuf;

#[derive(Args)]
pub struct CalcArgs {
    /// Parameter file (TOML or JSON). Built-in defaults are used when omitted.
    pub config: Option<PathBuf>,

    /// Override a parameter by key or symbol, e.g. `--set speed=20` or `--set vh=20`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Report format: text, json or csv.
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout. The format's
    /// extension is added when the path has none.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CalcArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let rendered = calc::render_report(config, &self.overrides, self.format)?;

        match &self.output {
            Some(path) => {
                let written = calc::write_report(path, self.format, &rendered)?;
                tracing::info!("Wrote {} report to {}", self.format, written.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
