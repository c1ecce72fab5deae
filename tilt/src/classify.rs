//! Tilt geometry and the upright/tipped classifier.
//!
//! The tilt angle is measured between the body z-axis and the vertical using
//! `atan2(sqrt(x² + y²), z)`. Keeping the sign of `z` separates face-up (0°)
//! from face-down (180°), and the two-argument form has no domain error as the
//! horizontal component approaches zero.

use std::fmt;
use strum_macros::{Display, EnumString, IntoStaticStr};
use tilt_traits::GravityVector;

/// Beyond this many degrees from vertical the device counts as tipped over.
pub const TIP_THRESHOLD_DEG: f32 = 45.0;

/// Angle between the body z-axis and the vertical, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TiltAngle(f32);

impl TiltAngle {
    pub fn from_degrees(degrees: f32) -> Self {
        TiltAngle(degrees)
    }

    pub fn degrees(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for TiltAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum Status {
    #[strum(serialize = "UPRIGHT")]
    Upright,
    #[strum(serialize = "TIPPED")]
    Tipped,
}

impl Status {
    /// Strictly greater than the threshold tips; exactly 45° is still upright.
    pub fn from_angle(angle: TiltAngle) -> Self {
        let deg = angle.degrees();
        // The negative bound never fires for angles produced by `tilt_angle`,
        // whose range is [0, 180]. It stays so a signed angle source would
        // still be caught in either direction.
        if deg > TIP_THRESHOLD_DEG || deg < -TIP_THRESHOLD_DEG {
            Status::Tipped
        } else {
            Status::Upright
        }
    }
}

/// Tilt of the body z-axis from vertical. An all-zero vector yields 0°.
///
/// `atan2` and the degree conversion run in `f64` and are stored as `f32`
/// after each step; the printed hundredths depend on that rounding.
pub fn tilt_angle(gravity: GravityVector) -> TiltAngle {
    let horizontal = (gravity.x * gravity.x + gravity.y * gravity.y).sqrt();
    let radians = (horizontal as f64).atan2(gravity.z as f64) as f32;
    TiltAngle((radians as f64 * (180.0 / std::f64::consts::PI)) as f32)
}

pub fn classify(gravity: GravityVector) -> (TiltAngle, Status) {
    let angle = tilt_angle(gravity);
    (angle, Status::from_angle(angle))
}
