use crate::{
    report::Report,
    sheet::{SheetRow, section_title},
};
use palletcalc_core::ParameterGroup;
use serde::Serialize;
use std::{fmt, fmt::Write as _, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to format report")]
    Fmt(#[from] fmt::Error),

    #[error("failed to write CSV")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to render JSON")]
    Json(#[from] serde_json::Error),

    #[error("unknown output format '{0}', expected text, json or csv")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Printable report
    #[default]
    Text,
    Json,
    /// Spreadsheet export
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain; charset=utf-8",
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv; charset=utf-8",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

/// Render the printable report.
pub fn render_text(report: &Report) -> Result<String, ReportError> {
    let mut out = String::new();
    write_text(report, &mut out)?;
    Ok(out)
}

fn line(out: &mut String, text: String) -> fmt::Result {
    writeln!(out, "{}", text.trim_end())
}

fn write_sheet_row(out: &mut String, row: &SheetRow) -> fmt::Result {
    line(
        out,
        format!(
            "{:<5}{:<6}{:<27}{:<8}{:<7}{}",
            row.seq, row.symbol, row.label, row.display, row.unit, row.remark
        ),
    )
}

fn write_text(report: &Report, out: &mut String) -> fmt::Result {
    writeln!(out, "{}", report.title)?;
    writeln!(out, "{}", "=".repeat(report.title.chars().count()))?;

    for section in [ParameterGroup::Machine, ParameterGroup::Timing] {
        writeln!(out)?;
        writeln!(out, "{}", section_title(section))?;
        line(
            out,
            format!(
                "{:<5}{:<6}{:<27}{:<8}{:<7}{}",
                "Seq", "Sym", "Item", "Value", "Unit", "Remark"
            ),
        )?;
        for row in report.parameters.section(section) {
            write_sheet_row(out, row)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Results")?;
    for metric in &report.metrics {
        line(
            out,
            format!(
                "{:<12}{} {}  ({})",
                metric.label, metric.display, metric.unit, metric.subtext
            ),
        )?;
    }

    for panel in &report.panels {
        writeln!(out)?;
        writeln!(out, "{}  {}", panel.title, panel.summary)?;
        for row in &panel.rows {
            line(
                out,
                format!(
                    "  {:<22}{:>9} {:<4}{}",
                    row.label, row.display, row.unit, row.desc
                ),
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Advisories")?;
    if report.advisories.is_empty() {
        writeln!(out, "  none")?;
    }
    for advisory in &report.advisories {
        writeln!(out, "  - {advisory}")?;
    }

    writeln!(out)?;
    writeln!(out, "Notes")?;
    for (idx, note) in report.notes.iter().enumerate() {
        writeln!(out, "  {}. {note}", idx + 1)?;
    }

    Ok(())
}

/// Render a `section,key,symbol,value,unit` table with full precision values.
pub fn render_csv(report: &Report) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(["section", "key", "symbol", "value", "unit"])?;

    for row in &report.parameters.rows {
        writer.write_record([
            "parameter",
            row.key,
            row.symbol,
            row.value.to_string().as_str(),
            row.unit,
        ])?;
    }

    let result = &report.result;
    let results: [(&str, &str, f64, &str); 9] = [
        ("speed_mps", "vt", result.speed_mps, "m/s"),
        ("inbound_distance", "", result.inbound_distance, "m"),
        ("inbound_time", "", result.inbound_time, "s"),
        ("outbound_distance", "", result.outbound_distance, "m"),
        ("outbound_time", "", result.outbound_time, "s"),
        ("auxiliary_time", "tad", result.auxiliary_time, "s"),
        ("lift_time_total", "", result.lift_time_total, "s"),
        ("cycle_time", "tm1", result.cycle_time, "s"),
        ("throughput", "n", result.throughput, "pallets/h"),
    ];
    for (key, symbol, value, unit) in results {
        writer.write_record(["result", key, symbol, value.to_string().as_str(), unit])?;
    }
    writer.write_record([
        "result",
        "feasible",
        "",
        if result.feasible { "true" } else { "false" },
        "",
    ])?;

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_json(report: &Report) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
