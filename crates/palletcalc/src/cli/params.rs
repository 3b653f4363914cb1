use anyhow::Result;
use clap::{Args, ValueEnum};
use palletcalc::config::Config;

#[derive(Clone, Copy, ValueEnum)]
pub enum ParamsFormat {
    Toml,
    Json,
}

#[derive(Args)]
pub struct ParamsArgs {
    /// Output format for the default parameter file.
    #[arg(short, long, value_enum, default_value_t = ParamsFormat::Toml)]
    pub format: ParamsFormat,
}

impl ParamsArgs {
    pub fn run(&self) -> Result<()> {
        let config = Config::default();
        let content = match self.format {
            ParamsFormat::Toml => config.to_toml()?,
            ParamsFormat::Json => config.to_json()?,
        };
        println!("{}", content.trim_end());
        Ok(())
    }
}
