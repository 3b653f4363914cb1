use crate::{Report, render_csv, render_text};
use palletcalc_core::{CycleInput, calculate_cycle};
use serde::Deserialize;

/// The `[parameters]` table of a palletcalc config file.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Machine {
    #[serde(default)]
    parameters: CycleInput,
}

fn report_from_str(input: &str) -> Result<Report, String> {
    let machine: Machine = toml::from_str(input).map_err(|err| format!("invalid input: {err}"))?;
    let input = machine.parameters;
    Ok(Report::new(&input, &calculate_cycle(&input)))
}

/// Convenience helper for snapshotting the printable report.
pub fn snapshot_text_from_str(input: &str) -> String {
    match report_from_str(input).and_then(|r| render_text(&r).map_err(|err| err.to_string())) {
        Ok(text) => text.trim_end().to_string(),
        Err(err) => format!("render error: {err}"),
    }
}

/// Convenience helper for snapshotting the spreadsheet export.
pub fn snapshot_csv_from_str(input: &str) -> String {
    match report_from_str(input).and_then(|r| render_csv(&r).map_err(|err| err.to_string())) {
        Ok(csv) => csv.trim_end().to_string(),
        Err(err) => format!("render error: {err}"),
    }
}

#[test]
fn machine_files_need_a_parameters_table() {
    let flat = snapshot_text_from_str("accel = 0\n");
    assert!(flat.starts_with("render error: invalid input:"), "{flat}");

    let table = snapshot_text_from_str("[parameters]\naccel = 0\n");
    assert!(table.contains("travel cannot complete"), "{table}");
}
