use crate::{
    format,
    sheet::{Advisory, ParameterSheet, advisories},
};
use palletcalc_core::{CycleInput, CycleResult, MotionProfile, ProfileShape};
use serde::Serialize;

/// Explanatory notes printed at the bottom of every report.
pub const NOTES: [&str; 3] = [
    "The distance from the transfer edge to the start of the chain conveyor is usually 0.3-1 m.",
    "Travel times follow a trapezoidal velocity profile.",
    "Inbound travel includes acceleration and deceleration; outbound travel counts acceleration only.",
];

/// Headline figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub display: String,
    pub unit: &'static str,
    pub subtext: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: f64,
    pub display: String,
    pub unit: &'static str,
    pub desc: &'static str,
}

/// A group of breakdown rows with a one-line summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: &'static str,
    pub summary: String,
    pub rows: Vec<DetailRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub input: CycleInput,
    pub result: CycleResult,
    pub parameters: ParameterSheet,
    pub metrics: Vec<Metric>,
    pub panels: Vec<Panel>,
    pub advisories: Vec<Advisory>,
    pub notes: Vec<&'static str>,
}

fn detail(label: &'static str, value: f64, unit: &'static str, desc: &'static str) -> DetailRow {
    DetailRow {
        label,
        value,
        display: format::detail(value),
        unit,
        desc,
    }
}

fn profile_desc(profile: Option<&MotionProfile>) -> &'static str {
    match profile.map(|p| p.shape) {
        None => "infeasible",
        Some(ProfileShape::Stationary) => "no travel",
        Some(ProfileShape::Triangular) => "accel + decel (triangular)",
        Some(ProfileShape::Trapezoidal) => "accel + decel (trapezoidal)",
        Some(ProfileShape::Ramp) => "accel only (ramp)",
        Some(ProfileShape::RampCruise) => "accel only (ramp + cruise)",
    }
}

impl Report {
    pub fn new(input: &CycleInput, result: &CycleResult) -> Self {
        let metrics = vec![
            Metric {
                label: "Capacity",
                value: result.throughput,
                display: format::metric(result.throughput),
                unit: "pallets/h",
                subtext: "efficiency factor included",
            },
            Metric {
                label: "Cycle time",
                value: result.cycle_time,
                display: format::metric(result.cycle_time),
                unit: "s",
                subtext: "total tm1",
            },
        ];

        let panels = vec![
            Panel {
                title: "Inbound",
                summary: format!("S = {} m", format::summary(result.inbound_distance)),
                rows: vec![
                    detail("Travel speed (vt)", result.speed_mps, "m/s", ""),
                    detail(
                        "Travel time",
                        result.inbound_time,
                        "s",
                        profile_desc(result.inbound_profile.as_ref()),
                    ),
                ],
            },
            Panel {
                title: "Outbound",
                summary: format!("S = {} m", format::summary(result.outbound_distance)),
                rows: vec![
                    detail("Travel speed (vt)", result.speed_mps, "m/s", ""),
                    detail(
                        "Travel time",
                        result.outbound_time,
                        "s",
                        profile_desc(result.outbound_profile.as_ref()),
                    ),
                ],
            },
            Panel {
                title: "Fixed",
                summary: format!(
                    "Total = {} s",
                    format::summary(result.lift_time_total + result.auxiliary_time)
                ),
                rows: vec![
                    detail("Lift + lower total", result.lift_time_total, "s", "two strokes"),
                    detail(
                        "Switch/position/comm",
                        result.auxiliary_time,
                        "s",
                        "auxiliary time",
                    ),
                ],
            },
        ];

        Self {
            title: "Pallet Transfer Cycle Report",
            input: *input,
            result: *result,
            parameters: ParameterSheet::from_input(input),
            metrics,
            panels,
            advisories: advisories(input, result),
            notes: NOTES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletcalc_core::calculate_cycle;

    #[test]
    fn reference_report() {
        let input = CycleInput::default();
        let report = Report::new(&input, &calculate_cycle(&input));

        assert_eq!(report.metrics[0].display, "98.71");
        assert_eq!(report.metrics[1].display, "31");
        assert_eq!(report.panels[0].summary, "S = 4.30 m");
        assert_eq!(report.panels[0].rows[1].display, "15.333");
        assert_eq!(report.panels[0].rows[1].desc, "accel + decel (trapezoidal)");
        assert_eq!(report.panels[1].rows[1].display, "9.167");
        assert_eq!(report.panels[2].summary, "Total = 6.50 s");
        assert!(report.advisories.is_empty());
        assert_eq!(report.notes.len(), 3);
    }

    #[test]
    fn infeasible_travel_is_described() {
        let input = CycleInput {
            accel: 0.0,
            ..CycleInput::default()
        };
        let report = Report::new(&input, &calculate_cycle(&input));
        assert_eq!(report.panels[0].rows[1].desc, "infeasible");
        assert_eq!(report.panels[1].rows[1].desc, "infeasible");
        assert_eq!(report.advisories[0], Advisory::Infeasible);
    }
}
