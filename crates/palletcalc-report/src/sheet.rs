use crate::format;
use palletcalc_core::{CycleInput, CycleResult, Parameter, ParameterGroup};
use serde::Serialize;
use std::fmt;

/// Heading printed above a group of sheet rows.
pub fn section_title(group: ParameterGroup) -> &'static str {
    match group {
        ParameterGroup::Machine => "Parameters",
        ParameterGroup::Timing => "Timing",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetRow {
    pub seq: String,
    pub key: &'static str,
    pub symbol: &'static str,
    pub label: &'static str,
    pub value: f64,
    /// `value` as printed on the sheet
    pub display: String,
    pub unit: &'static str,
    pub remark: &'static str,
    #[serde(skip)]
    pub section: ParameterGroup,
}

/// The input grid of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterSheet {
    pub rows: Vec<SheetRow>,
}

fn label(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::FixedLength => "Fixed conveyor length",
        Parameter::CargoWidth => "Cargo width",
        Parameter::GapIn => "Pallet gap (in)",
        Parameter::TransferLength => "Transfer conveyor length",
        Parameter::CargoLength => "Cargo length",
        Parameter::GapOut => "Pallet gap (out)",
        Parameter::Speed => "Travel speed",
        Parameter::Accel => "Travel acceleration",
        Parameter::Efficiency => "Efficiency factor",
        Parameter::LiftTime => "Lift/lower single stroke",
        Parameter::SwitchTime => "Action switch time",
        Parameter::CommTime => "Electrical handshake",
        Parameter::ExitDelay => "Exit delay",
    }
}

fn remark(parameter: Parameter) -> &'static str {
    match parameter {
        Parameter::FixedLength => "typically 0.3 m",
        Parameter::CargoWidth | Parameter::CargoLength => "pallet included",
        Parameter::GapIn | Parameter::GapOut => "typically 0.2 m",
        Parameter::TransferLength => "typically 0",
        Parameter::Speed => "recommended 12-20",
        Parameter::Accel => "recommended 0.3-0.5",
        Parameter::Efficiency => "range 0.8-0.9",
        Parameter::LiftTime => "per action",
        Parameter::SwitchTime => "mechanical response",
        Parameter::CommTime => "PLC handshake",
        Parameter::ExitDelay => "safety buffer",
    }
}

impl ParameterSheet {
    pub fn from_input(input: &CycleInput) -> Self {
        let mut machine_seq = 0;
        let mut timing_seq = 0;
        let rows = Parameter::ALL
            .into_iter()
            .map(|parameter| {
                let section = parameter.group();
                let seq = match section {
                    ParameterGroup::Timing => {
                        timing_seq += 1;
                        format!("T{timing_seq}")
                    }
                    ParameterGroup::Machine => {
                        machine_seq += 1;
                        machine_seq.to_string()
                    }
                };
                let value = parameter.get(input);
                SheetRow {
                    seq,
                    key: parameter.key(),
                    symbol: parameter.symbol(),
                    label: label(parameter),
                    value,
                    display: format::parameter(value),
                    unit: parameter.unit(),
                    remark: remark(parameter),
                    section,
                }
            })
            .collect();
        Self { rows }
    }

    pub fn section(&self, section: ParameterGroup) -> impl Iterator<Item = &SheetRow> {
        self.rows.iter().filter(move |row| row.section == section)
    }
}

/// Inclusive range an operator is advised to stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendedRange {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
}

pub fn recommended_range(parameter: Parameter) -> Option<RecommendedRange> {
    let (min, max) = match parameter {
        Parameter::Speed => (12.0, 20.0),
        Parameter::Accel => (0.3, 0.5),
        Parameter::Efficiency => (0.8, 0.9),
        _ => return None,
    };
    Some(RecommendedRange {
        parameter,
        min,
        max,
    })
}

/// Something the operator should double-check before trusting the numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    OutsideRecommended {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    EfficiencyOutOfRange {
        value: f64,
    },
    Infeasible,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutsideRecommended {
                parameter,
                value,
                min,
                max,
            } => write!(
                f,
                "{parameter} = {} is outside the recommended range {}-{}",
                format::parameter(*value),
                format::parameter(*min),
                format::parameter(*max),
            ),
            Advisory::EfficiencyOutOfRange { value } => write!(
                f,
                "efficiency = {} must be greater than 0 and at most 1",
                format::parameter(*value),
            ),
            Advisory::Infeasible => f.write_str(
                "travel speed and acceleration must be positive; travel cannot complete",
            ),
        }
    }
}

/// Collect advisories for an input and its result.
pub fn advisories(input: &CycleInput, result: &CycleResult) -> Vec<Advisory> {
    let mut out = Vec::new();

    if !result.feasible {
        out.push(Advisory::Infeasible);
    }

    if input.efficiency <= 0.0 || input.efficiency > 1.0 {
        out.push(Advisory::EfficiencyOutOfRange {
            value: input.efficiency,
        });
    }

    for parameter in Parameter::ALL {
        let Some(range) = recommended_range(parameter) else {
            continue;
        };
        let value = parameter.get(input);
        if value < range.min || value > range.max {
            out.push(Advisory::OutsideRecommended {
                parameter: parameter.key(),
                value,
                min: range.min,
                max: range.max,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletcalc_core::calculate_cycle;

    #[test]
    fn sheet_numbering() {
        let sheet = ParameterSheet::from_input(&CycleInput::default());
        let seqs: Vec<_> = sheet.rows.iter().map(|r| r.seq.as_str()).collect();
        assert_eq!(
            seqs,
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "T1", "T2", "T3", "T4"]
        );
        assert_eq!(sheet.section(ParameterGroup::Machine).count(), 9);
        assert_eq!(sheet.section(ParameterGroup::Timing).count(), 4);
    }

    #[test]
    fn sheet_displays_values() {
        let sheet = ParameterSheet::from_input(&CycleInput::default());
        let speed = sheet.rows.iter().find(|r| r.key == "speed").unwrap();
        assert_eq!(speed.display, "18");
        assert_eq!(speed.unit, "m/min");
        assert_eq!(speed.symbol, "vh");
        let gap = sheet.rows.iter().find(|r| r.key == "gap_in").unwrap();
        assert_eq!(gap.display, "0.2");
    }

    #[test]
    fn defaults_need_no_advice() {
        let input = CycleInput::default();
        let result = calculate_cycle(&input);
        assert!(advisories(&input, &result).is_empty());
    }

    #[test]
    fn out_of_range_values_are_flagged() {
        let input = CycleInput {
            speed: 0.0,
            efficiency: 1.2,
            ..CycleInput::default()
        };
        let result = calculate_cycle(&input);
        let advice = advisories(&input, &result);
        assert_eq!(advice[0], Advisory::Infeasible);
        assert_eq!(advice[1], Advisory::EfficiencyOutOfRange { value: 1.2 });
        assert_eq!(
            advice[2].to_string(),
            "speed = 0 is outside the recommended range 12-20"
        );
        assert_eq!(
            advice[3].to_string(),
            "efficiency = 1.2 is outside the recommended range 0.8-0.9"
        );
        assert_eq!(advice.len(), 4);
    }
}
