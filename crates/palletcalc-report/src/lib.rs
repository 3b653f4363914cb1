//! Parameter sheets, analysis reports and their printable/exportable forms.

pub mod format;
mod render;
mod report;
mod sheet;

pub use render::{OutputFormat, ReportError, render, render_csv, render_json, render_text};
pub use report::{DetailRow, Metric, NOTES, Panel, Report};
pub use sheet::{
    Advisory, ParameterSheet, RecommendedRange, SheetRow, advisories, recommended_range,
    section_title,
};

#[cfg(test)]
mod testing;
