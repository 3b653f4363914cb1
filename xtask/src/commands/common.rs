use anyhow::Result;
use xshell::{Shell, cmd};

/// Crate holding the insta report snapshots
pub const REPORT_CRATE: &str = "palletcalc-report";

/// Directory with the machine files the report snapshots are generated from
pub const TEST_DATA: &str = "crates/palletcalc-report/test-data";

/// Run rustfmt check (does not modify files)
pub fn run_fmt_check(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo fmt check...");
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    Ok(())
}

/// Apply rustfmt to all files
pub fn run_fmt(sh: &Shell) -> Result<()> {
    eprintln!("Applying cargo fmt...");
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

/// Run clippy with all warnings treated as errors
pub fn run_clippy(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo clippy...");
    cmd!(
        sh,
        "cargo clippy --all-features --all-targets --workspace -- -D warnings"
    )
    .run()?;
    Ok(())
}

/// Run the report snapshot tests without writing any `.snap.new` files
pub fn run_snapshot_check(sh: &Shell) -> Result<()> {
    eprintln!("Checking report snapshots...");
    let _env = sh.push_env("INSTA_UPDATE", "no");
    cmd!(sh, "cargo test --package {REPORT_CRATE}").run()?;
    Ok(())
}
