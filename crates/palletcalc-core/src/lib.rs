//! Motion and cycle time calculation for pallet transfer machines.
//!
//! This crate is pure computation: no I/O, no shared state. Every call
//! maps an input parameter set to a fresh result set.

pub mod cycle;
pub mod motion;
pub mod parameter;

pub use cycle::{CalcOptions, CycleInput, CycleResult, calculate_cycle, calculate_cycle_with};
pub use motion::{
    INFEASIBLE_TIME, MotionError, MotionMode, MotionProfile, ProfileShape, motion_time,
    motion_time_with, plan_motion,
};
pub use parameter::{Parameter, ParameterGroup, UnknownParameter};
