//! Cycle time and throughput of a pallet transfer machine.
//!
//! One cycle is: inbound travel onto the transfer (full stop-to-stop move),
//! a lift up and down, outbound travel off the transfer (accel-only, the
//! downstream conveyor takes over the pallet), plus fixed auxiliary time
//! for switching, handshaking and the exit delay.

use crate::motion::{INFEASIBLE_TIME, MotionMode, MotionProfile, plan_motion};
use serde::{Deserialize, Serialize};

/// Discrete mechanical switch events per cycle.
pub const SWITCHES_PER_CYCLE: f64 = 4.0;

/// Lift strokes per cycle (one up, one down).
pub const LIFT_STROKES_PER_CYCLE: f64 = 2.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Machine parameters for one calculation.
///
/// Lengths are in meters, times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CycleInput {
    /// x1: fixed conveyor length
    pub fixed_length: f64,
    /// x2: cargo width, pallet included
    pub cargo_width: f64,
    /// x3: pallet gap on the way in
    pub gap_in: f64,
    /// x4: transfer conveyor length
    pub transfer_length: f64,
    /// x5: cargo length, pallet included
    pub cargo_length: f64,
    /// x6: pallet gap on the way out
    pub gap_out: f64,
    /// vh: travel speed in m/min
    pub speed: f64,
    /// ay: travel acceleration in m/s²
    pub accel: f64,
    /// η: overall efficiency factor
    pub efficiency: f64,
    /// tsj: single lift or lower stroke
    pub lift_time: f64,
    /// Action switch time, counted four times per cycle
    pub switch_time: f64,
    /// Electrical communication handshake
    pub comm_time: f64,
    /// Delay before the pallet is considered clear of the machine
    pub exit_delay: f64,
}

impl Default for CycleInput {
    fn default() -> Self {
        Self {
            fixed_length: 0.3,
            cargo_width: 3.8,
            gap_in: 0.2,
            transfer_length: 0.0,
            cargo_length: 2.4,
            gap_out: 0.2,
            speed: 18.0,
            accel: 0.3,
            efficiency: 0.85,
            lift_time: 2.0,
            switch_time: 0.25,
            comm_time: 1.0,
            exit_delay: 0.5,
        }
    }
}

impl CycleInput {
    pub fn inbound_distance(&self) -> f64 {
        self.fixed_length + self.cargo_width + self.gap_in
    }

    pub fn outbound_distance(&self) -> f64 {
        self.transfer_length + self.cargo_length + self.gap_out
    }

    /// Travel speed converted to m/s.
    pub fn speed_per_second(&self) -> f64 {
        self.speed / SECONDS_PER_MINUTE
    }
}

/// Knobs that change how degenerate inputs are reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalcOptions {
    /// Time charged to a move that can never complete.
    pub infeasible_time: f64,
}

impl Default for CalcOptions {
    fn default() -> Self {
        Self {
            infeasible_time: INFEASIBLE_TIME,
        }
    }
}

/// Full breakdown of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// vt: travel speed in m/s
    pub speed_mps: f64,
    pub inbound_distance: f64,
    pub inbound_time: f64,
    pub outbound_distance: f64,
    pub outbound_time: f64,
    /// tad: switching, handshake and exit delay
    pub auxiliary_time: f64,
    pub lift_time_total: f64,
    /// tm1: average single operating cycle
    pub cycle_time: f64,
    /// n: pallets per hour, efficiency included
    pub throughput: f64,
    /// `None` when the move could not be planned.
    pub inbound_profile: Option<MotionProfile>,
    pub outbound_profile: Option<MotionProfile>,
    /// False when any move was charged the infeasible time.
    pub feasible: bool,
}

/// Calculate one cycle with the default infeasible sentinel.
pub fn calculate_cycle(input: &CycleInput) -> CycleResult {
    calculate_cycle_with(input, &CalcOptions::default())
}

pub fn calculate_cycle_with(input: &CycleInput, options: &CalcOptions) -> CycleResult {
    let speed_mps = input.speed_per_second();

    let inbound_distance = input.inbound_distance();
    let inbound = plan_motion(
        inbound_distance,
        speed_mps,
        input.accel,
        MotionMode::AccelDecel,
    );

    let outbound_distance = input.outbound_distance();
    let outbound = plan_motion(
        outbound_distance,
        speed_mps,
        input.accel,
        MotionMode::AccelOnly,
    );

    let feasible = inbound.is_ok() && outbound.is_ok();
    if let Err(err) = inbound {
        tracing::warn!(distance = inbound_distance, "inbound travel infeasible: {err}");
    }
    if let Err(err) = outbound {
        tracing::warn!(distance = outbound_distance, "outbound travel infeasible: {err}");
    }

    let inbound_time = inbound.map_or(options.infeasible_time, |p| p.total_time());
    let outbound_time = outbound.map_or(options.infeasible_time, |p| p.total_time());

    let auxiliary_time =
        SWITCHES_PER_CYCLE * input.switch_time + input.comm_time + input.exit_delay;
    let lift_time_total = input.lift_time * LIFT_STROKES_PER_CYCLE;

    let cycle_time = inbound_time + outbound_time + lift_time_total + auxiliary_time;
    let throughput = if cycle_time > 0.0 {
        SECONDS_PER_HOUR * input.efficiency / cycle_time
    } else {
        0.0
    };

    tracing::debug!(
        inbound_time,
        outbound_time,
        auxiliary_time,
        cycle_time,
        throughput,
        "calculated cycle"
    );

    CycleResult {
        speed_mps,
        inbound_distance,
        inbound_time,
        outbound_distance,
        outbound_time,
        auxiliary_time,
        lift_time_total,
        cycle_time,
        throughput,
        inbound_profile: inbound.ok(),
        outbound_profile: outbound.ok(),
        feasible,
    }
}
