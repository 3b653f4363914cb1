//! Point-to-point travel time under a trapezoidal velocity profile.
//!
//! A move starts from rest, accelerates at a constant rate up to the
//! commanded speed, cruises, and (optionally) decelerates back to rest.
//! When the distance is too short to reach the commanded speed the
//! profile collapses into a triangle (or a single ramp for accel-only
//! moves).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Travel time reported for moves that can never complete.
///
/// Returned by [`motion_time`] when the speed or acceleration is not
/// positive. Use [`plan_motion`] to get an explicit error instead.
pub const INFEASIBLE_TIME: f64 = 9999.0;

/// How a move ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Ramp up, cruise, ramp down to rest at the end of the distance.
    #[default]
    AccelDecel,
    /// Ramp up and cruise only; the downstream stage absorbs the stop.
    AccelOnly,
}

/// Shape of the velocity-vs-time curve actually followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileShape {
    /// No travel required.
    Stationary,
    /// Accel+decel move that never reaches the commanded speed.
    Triangular,
    /// Accel, cruise, decel.
    Trapezoidal,
    /// Accel-only move that never reaches the commanded speed.
    Ramp,
    /// Accel-only move that reaches the commanded speed and cruises.
    RampCruise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("travel speed must be positive")]
    NonPositiveSpeed,

    #[error("travel acceleration must be positive")]
    NonPositiveAccel,
}

/// Phase breakdown of a single move.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    pub shape: ProfileShape,
    pub distance: f64,
    /// Time spent accelerating (s)
    pub accel_t: f64,
    /// Time spent at constant speed (s)
    pub cruise_t: f64,
    /// Time spent decelerating (s)
    pub decel_t: f64,
    /// Highest speed reached (distance/s)
    pub peak_speed: f64,
}

impl MotionProfile {
    fn stationary(distance: f64) -> Self {
        Self {
            shape: ProfileShape::Stationary,
            distance,
            accel_t: 0.0,
            cruise_t: 0.0,
            decel_t: 0.0,
            peak_speed: 0.0,
        }
    }

    /// Total time from start of motion to end of the last phase.
    pub fn total_time(&self) -> f64 {
        self.accel_t + self.decel_t + self.cruise_t
    }

    pub fn reaches_cruise(&self) -> bool {
        matches!(
            self.shape,
            ProfileShape::Trapezoidal | ProfileShape::RampCruise
        )
    }
}

/// Plan a move of `distance` starting from rest.
///
/// Non-positive distances need no motion and yield a stationary profile
/// regardless of the other arguments.
pub fn plan_motion(
    distance: f64,
    max_speed: f64,
    accel: f64,
    mode: MotionMode,
) -> Result<MotionProfile, MotionError> {
    if distance <= 0.0 {
        return Ok(MotionProfile::stationary(distance));
    }
    if max_speed <= 0.0 {
        return Err(MotionError::NonPositiveSpeed);
    }
    if accel <= 0.0 {
        return Err(MotionError::NonPositiveAccel);
    }

    let t_acc = max_speed / accel;
    let d_acc = 0.5 * accel * t_acc * t_acc;

    let profile = match mode {
        MotionMode::AccelOnly if distance <= d_acc => {
            // d = a*t^2/2
            let accel_t = (2.0 * distance / accel).sqrt();
            MotionProfile {
                shape: ProfileShape::Ramp,
                distance,
                accel_t,
                cruise_t: 0.0,
                decel_t: 0.0,
                peak_speed: accel * accel_t,
            }
        }
        MotionMode::AccelOnly => MotionProfile {
            shape: ProfileShape::RampCruise,
            distance,
            accel_t: t_acc,
            cruise_t: (distance - d_acc) / max_speed,
            decel_t: 0.0,
            peak_speed: max_speed,
        },
        MotionMode::AccelDecel => {
            let ramp_dist = 2.0 * d_acc;
            if distance <= ramp_dist {
                // each half covers distance/2 = a*t_half^2/2
                let t_half = (distance / accel).sqrt();
                MotionProfile {
                    shape: ProfileShape::Triangular,
                    distance,
                    accel_t: t_half,
                    cruise_t: 0.0,
                    decel_t: t_half,
                    peak_speed: accel * t_half,
                }
            } else {
                MotionProfile {
                    shape: ProfileShape::Trapezoidal,
                    distance,
                    accel_t: t_acc,
                    cruise_t: (distance - ramp_dist) / max_speed,
                    decel_t: t_acc,
                    peak_speed: max_speed,
                }
            }
        }
    };

    Ok(profile)
}

/// Travel time for a move, or [`INFEASIBLE_TIME`] if it can never complete.
pub fn motion_time(distance: f64, max_speed: f64, accel: f64, mode: MotionMode) -> f64 {
    motion_time_with(distance, max_speed, accel, mode, INFEASIBLE_TIME)
}

/// Like [`motion_time`] with a caller-chosen infeasible sentinel.
pub fn motion_time_with(
    distance: f64,
    max_speed: f64,
    accel: f64,
    mode: MotionMode,
    infeasible_time: f64,
) -> f64 {
    plan_motion(distance, max_speed, accel, mode)
        .map(|profile| profile.total_time())
        .unwrap_or(infeasible_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    /// Map raw fuzz input to a strictly positive real.
    fn positive(raw: u16) -> f64 {
        (raw as f64 + 1.0) / 100.0
    }

    #[test]
    fn zero_distance_is_instant() {
        for mode in [MotionMode::AccelDecel, MotionMode::AccelOnly] {
            assert_eq!(motion_time(0.0, 0.3, 0.3, mode), 0.0);
            assert_eq!(motion_time(-1.5, 0.3, 0.3, mode), 0.0);
            // distance check wins over invalid kinematics
            assert_eq!(motion_time(0.0, 0.0, 0.0, mode), 0.0);
            assert_eq!(motion_time(-2.0, -1.0, 0.3, mode), 0.0);
        }
    }

    #[test]
    fn invalid_kinematics_return_sentinel() {
        for mode in [MotionMode::AccelDecel, MotionMode::AccelOnly] {
            assert_eq!(motion_time(1.0, 0.0, 0.3, mode), INFEASIBLE_TIME);
            assert_eq!(motion_time(1.0, 0.3, 0.0, mode), INFEASIBLE_TIME);
            assert_eq!(motion_time(1.0, -0.3, -0.3, mode), INFEASIBLE_TIME);
            assert_eq!(motion_time_with(1.0, 0.0, 0.3, mode, 1e6), 1e6);
        }
    }

    #[test]
    fn plan_reports_explicit_errors() {
        let mode = MotionMode::AccelDecel;
        assert_eq!(
            plan_motion(1.0, 0.0, 0.3, mode),
            Err(MotionError::NonPositiveSpeed)
        );
        assert_eq!(
            plan_motion(1.0, 0.3, -1.0, mode),
            Err(MotionError::NonPositiveAccel)
        );
        let stationary = plan_motion(0.0, 0.0, 0.0, mode).unwrap();
        assert_eq!(stationary.shape, ProfileShape::Stationary);
        assert_eq!(stationary.total_time(), 0.0);
    }

    #[test]
    fn trapezoidal_inbound_reference() {
        // 0.3 m/s, 0.3 m/s^2: t_acc = 1 s, d_acc = 0.15 m
        let profile = plan_motion(4.3, 0.3, 0.3, MotionMode::AccelDecel).unwrap();
        assert_eq!(profile.shape, ProfileShape::Trapezoidal);
        assert!(close(profile.accel_t, 1.0));
        assert!(close(profile.decel_t, 1.0));
        assert!(close(profile.cruise_t, 4.0 / 0.3));
        assert!(close(profile.total_time(), 15.333_333_333_333_334));
        assert_eq!(profile.peak_speed, 0.3);
    }

    #[test]
    fn accel_only_reference() {
        let profile = plan_motion(2.6, 0.3, 0.3, MotionMode::AccelOnly).unwrap();
        assert_eq!(profile.shape, ProfileShape::RampCruise);
        assert_eq!(profile.decel_t, 0.0);
        assert!(close(profile.total_time(), 9.166_666_666_666_668));
    }

    #[test]
    fn triangular_profile() {
        // 0.2 m is below the 0.3 m needed for both ramps
        let profile = plan_motion(0.2, 0.3, 0.3, MotionMode::AccelDecel).unwrap();
        assert_eq!(profile.shape, ProfileShape::Triangular);
        assert!(!profile.reaches_cruise());
        assert!(close(profile.total_time(), 2.0 * (0.2f64 / 0.3).sqrt()));
        assert!(profile.peak_speed < 0.3);
    }

    #[test]
    fn short_ramp_profile() {
        let profile = plan_motion(0.1, 0.3, 0.3, MotionMode::AccelOnly).unwrap();
        assert_eq!(profile.shape, ProfileShape::Ramp);
        assert!(close(profile.total_time(), (2.0f64 * 0.1 / 0.3).sqrt()));
    }

    #[test]
    fn accel_only_is_never_slower() {
        for distance in [0.05, 0.15, 0.3, 1.0, 10.0] {
            let full = motion_time(distance, 0.3, 0.3, MotionMode::AccelDecel);
            let open = motion_time(distance, 0.3, 0.3, MotionMode::AccelOnly);
            assert!(open <= full, "distance {distance}: {open} > {full}");
        }
    }

    #[test]
    fn continuous_at_triangle_boundary() {
        bolero::check!()
            .with_type::<(u16, u16)>()
            .for_each(|&(v, a)| {
                let (v, a) = (positive(v), positive(a));
                let t_acc = v / a;
                let boundary = 2.0 * (0.5 * a * t_acc * t_acc);
                let triangular = 2.0 * (boundary / a).sqrt();
                let trapezoidal = 2.0 * t_acc + (boundary - boundary) / v;
                assert!(close(triangular, trapezoidal));
                assert!(close(
                    motion_time(boundary, v, a, MotionMode::AccelDecel),
                    trapezoidal
                ));
            });
    }

    #[test]
    fn continuous_at_ramp_boundary() {
        bolero::check!()
            .with_type::<(u16, u16)>()
            .for_each(|&(v, a)| {
                let (v, a) = (positive(v), positive(a));
                let t_acc = v / a;
                let boundary = 0.5 * a * t_acc * t_acc;
                let ramp = (2.0 * boundary / a).sqrt();
                let ramp_cruise = t_acc + (boundary - boundary) / v;
                assert!(close(ramp, ramp_cruise));
                assert!(close(
                    motion_time(boundary, v, a, MotionMode::AccelOnly),
                    ramp_cruise
                ));
            });
    }

    #[test]
    fn monotonic_in_distance() {
        bolero::check!()
            .with_type::<(u16, u16, u16, u16, bool)>()
            .for_each(|&(d1, d2, v, a, accel_only)| {
                let (short, long) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
                let short = short as f64 / 1000.0;
                let long = long as f64 / 1000.0;
                let (v, a) = (positive(v), positive(a));
                let mode = if accel_only {
                    MotionMode::AccelOnly
                } else {
                    MotionMode::AccelDecel
                };
                let t_short = motion_time(short, v, a, mode);
                let t_long = motion_time(long, v, a, mode);
                assert!(
                    t_long + EPS * t_long.max(1.0) >= t_short,
                    "{long} took {t_long}, {short} took {t_short}"
                );
            });
    }

    #[test]
    fn phases_sum_to_total() {
        bolero::check!()
            .with_type::<(u16, u16, u16)>()
            .for_each(|&(d, v, a)| {
                let d = d as f64 / 1000.0;
                let (v, a) = (positive(v), positive(a));
                for mode in [MotionMode::AccelDecel, MotionMode::AccelOnly] {
                    let profile = plan_motion(d, v, a, mode).unwrap();
                    assert!(profile.peak_speed <= v + EPS * v);
                    assert!(profile.accel_t >= 0.0 && profile.cruise_t >= 0.0);
                    if mode == MotionMode::AccelOnly {
                        assert_eq!(profile.decel_t, 0.0);
                    }
                    assert_eq!(profile.total_time(), motion_time(d, v, a, mode));
                }
            });
    }
}
