//! Catalogue of the input parameters of a cycle calculation.

use crate::cycle::CycleInput;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Where a parameter sits on the parameter sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterGroup {
    /// Path lengths and kinematics, numbered 1 to 9.
    Machine,
    /// Fixed action times, numbered T1 to T4.
    Timing,
}

/// One of the thirteen inputs of [`CycleInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    FixedLength,
    CargoWidth,
    GapIn,
    TransferLength,
    CargoLength,
    GapOut,
    Speed,
    Accel,
    Efficiency,
    LiftTime,
    SwitchTime,
    CommTime,
    ExitDelay,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter '{0}'")]
pub struct UnknownParameter(pub String);

impl Parameter {
    /// Every parameter, in parameter sheet order.
    pub const ALL: [Parameter; 13] = [
        Parameter::FixedLength,
        Parameter::CargoWidth,
        Parameter::GapIn,
        Parameter::TransferLength,
        Parameter::CargoLength,
        Parameter::GapOut,
        Parameter::Speed,
        Parameter::Accel,
        Parameter::Efficiency,
        Parameter::LiftTime,
        Parameter::SwitchTime,
        Parameter::CommTime,
        Parameter::ExitDelay,
    ];

    /// Key used in config files, overrides and JSON.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::FixedLength => "fixed_length",
            Parameter::CargoWidth => "cargo_width",
            Parameter::GapIn => "gap_in",
            Parameter::TransferLength => "transfer_length",
            Parameter::CargoLength => "cargo_length",
            Parameter::GapOut => "gap_out",
            Parameter::Speed => "speed",
            Parameter::Accel => "accel",
            Parameter::Efficiency => "efficiency",
            Parameter::LiftTime => "lift_time",
            Parameter::SwitchTime => "switch_time",
            Parameter::CommTime => "comm_time",
            Parameter::ExitDelay => "exit_delay",
        }
    }

    /// Engineering symbol as printed on the machine datasheet.
    pub fn symbol(self) -> &'static str {
        match self {
            Parameter::FixedLength => "x1",
            Parameter::CargoWidth => "x2",
            Parameter::GapIn => "x3",
            Parameter::TransferLength => "x4",
            Parameter::CargoLength => "x5",
            Parameter::GapOut => "x6",
            Parameter::Speed => "vh",
            Parameter::Accel => "ay",
            Parameter::Efficiency => "η",
            Parameter::LiftTime => "tsj",
            Parameter::SwitchTime => "ts",
            Parameter::CommTime => "tc",
            Parameter::ExitDelay => "td",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::FixedLength
            | Parameter::CargoWidth
            | Parameter::GapIn
            | Parameter::TransferLength
            | Parameter::CargoLength
            | Parameter::GapOut => "m",
            Parameter::Speed => "m/min",
            Parameter::Accel => "m/s²",
            Parameter::Efficiency => "-",
            Parameter::LiftTime
            | Parameter::SwitchTime
            | Parameter::CommTime
            | Parameter::ExitDelay => "s",
        }
    }

    pub fn group(self) -> ParameterGroup {
        match self {
            Parameter::LiftTime
            | Parameter::SwitchTime
            | Parameter::CommTime
            | Parameter::ExitDelay => ParameterGroup::Timing,
            _ => ParameterGroup::Machine,
        }
    }

    pub fn get(self, input: &CycleInput) -> f64 {
        match self {
            Parameter::FixedLength => input.fixed_length,
            Parameter::CargoWidth => input.cargo_width,
            Parameter::GapIn => input.gap_in,
            Parameter::TransferLength => input.transfer_length,
            Parameter::CargoLength => input.cargo_length,
            Parameter::GapOut => input.gap_out,
            Parameter::Speed => input.speed,
            Parameter::Accel => input.accel,
            Parameter::Efficiency => input.efficiency,
            Parameter::LiftTime => input.lift_time,
            Parameter::SwitchTime => input.switch_time,
            Parameter::CommTime => input.comm_time,
            Parameter::ExitDelay => input.exit_delay,
        }
    }

    pub fn set(self, input: &mut CycleInput, value: f64) {
        let slot = match self {
            Parameter::FixedLength => &mut input.fixed_length,
            Parameter::CargoWidth => &mut input.cargo_width,
            Parameter::GapIn => &mut input.gap_in,
            Parameter::TransferLength => &mut input.transfer_length,
            Parameter::CargoLength => &mut input.cargo_length,
            Parameter::GapOut => &mut input.gap_out,
            Parameter::Speed => &mut input.speed,
            Parameter::Accel => &mut input.accel,
            Parameter::Efficiency => &mut input.efficiency,
            Parameter::LiftTime => &mut input.lift_time,
            Parameter::SwitchTime => &mut input.switch_time,
            Parameter::CommTime => &mut input.comm_time,
            Parameter::ExitDelay => &mut input.exit_delay,
        };
        *slot = value;
    }
}

impl FromStr for Parameter {
    type Err = UnknownParameter;

    /// Accepts either the key (`speed`) or the symbol (`vh`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Parameter::ALL
            .into_iter()
            .find(|p| p.key() == needle || p.symbol().to_lowercase() == needle)
            .ok_or_else(|| UnknownParameter(s.to_string()))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_and_symbol() {
        assert_eq!("speed".parse(), Ok(Parameter::Speed));
        assert_eq!("VH".parse(), Ok(Parameter::Speed));
        assert_eq!(" x3 ".parse(), Ok(Parameter::GapIn));
        assert_eq!("tsj".parse(), Ok(Parameter::LiftTime));
        assert_eq!(
            "warp".parse::<Parameter>(),
            Err(UnknownParameter("warp".to_string()))
        );
    }

    #[test]
    fn keys_and_symbols_are_unique() {
        for (i, a) in Parameter::ALL.iter().enumerate() {
            for b in &Parameter::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
                assert_ne!(a.symbol(), b.symbol());
            }
        }
    }

    #[test]
    fn timing_parameters_come_last() {
        let groups: Vec<_> = Parameter::ALL.iter().map(|p| p.group()).collect();
        assert_eq!(groups[..9], [ParameterGroup::Machine; 9]);
        assert_eq!(groups[9..], [ParameterGroup::Timing; 4]);
    }

    #[test]
    fn set_then_get() {
        let mut input = CycleInput::default();
        for (i, p) in Parameter::ALL.into_iter().enumerate() {
            p.set(&mut input, i as f64 + 0.5);
        }
        for (i, p) in Parameter::ALL.into_iter().enumerate() {
            assert_eq!(p.get(&input), i as f64 + 0.5);
        }
    }

    #[test]
    fn keys_match_serde_field_names() {
        let value = serde_json::to_value(CycleInput::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Parameter::ALL.len());
        for p in Parameter::ALL {
            assert_eq!(object[p.key()].as_f64(), Some(p.get(&CycleInput::default())));
        }
    }
}
