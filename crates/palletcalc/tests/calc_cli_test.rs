use anyhow::Result;
use std::{fs, process::Command};

const STALLED: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../palletcalc-report/test-data/stalled.toml"
);

fn palletcalc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_palletcalc"));
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_calc_writes_stalled_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("reports/stalled");

    let status = palletcalc()
        .arg("calc")
        .arg(STALLED)
        .arg("--output")
        .arg(&output)
        .status()?;
    assert!(status.success());

    let report = fs::read_to_string(dir.path().join("reports/stalled.txt"))?;
    assert!(report.contains("8    ay    Travel acceleration        0       m/s²"));
    assert!(report.contains("travel cannot complete"));
    assert!(report.contains("efficiency = 1.1 must be greater than 0 and at most 1"));

    Ok(())
}

#[test]
fn test_calc_override_to_stdout() -> Result<()> {
    let out = palletcalc()
        .args(["calc", "--set", "vh=0", "--format", "csv"])
        .output()?;
    assert!(out.status.success());

    let csv = String::from_utf8(out.stdout)?;
    assert!(csv.contains("parameter,speed,vh,0,m/min\n"));
    assert!(csv.ends_with("result,feasible,,false,\n"));

    let log = String::from_utf8(out.stderr)?;
    assert!(log.contains("travel cannot complete"));

    Ok(())
}

#[test]
fn test_calc_rejects_flat_machine_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("flat.toml");
    fs::write(&path, "accel = 0\n")?;

    let out = palletcalc().arg("calc").arg(&path).output()?;
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    Ok(())
}
