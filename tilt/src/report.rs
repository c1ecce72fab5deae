//! Fixed-format text records written to the serial link.
//!
//! Each cycle produces `X=<int> Y=<int> Z=<int> | ` followed by
//! `<STATUS>, <int>.<2 digits>\r\n`. Numbers are produced with integer
//! truncation only, never with float-to-text conversion, so negative values
//! truncate toward zero and a negative angle above -1° loses its sign.

use crate::classify::{Status, TiltAngle};
use tilt_traits::GravityVector;

/// Written once before the first cycle.
pub const BANNER: &str = "Starting tip-over monitoring...\r\n";

/// Separates the debug values from the status on a record line.
pub const FIELD_SEPARATOR: char = '|';

/// The two lines of one cycle, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub debug: String,
    pub status: String,
}

impl Report {
    pub fn lines(&self) -> [&str; 2] {
        [self.debug.as_str(), self.status.as_str()]
    }
}

/// Hundredths of a g, truncated toward zero.
pub fn centi_g(component: f32) -> i32 {
    (component * 100.0) as i32
}

pub fn debug_line(gravity: GravityVector) -> String {
    format!(
        "X={} Y={} Z={} {} ",
        centi_g(gravity.x),
        centi_g(gravity.y),
        centi_g(gravity.z),
        FIELD_SEPARATOR
    )
}

pub fn status_line(angle: TiltAngle, status: Status) -> String {
    let degrees = angle.degrees();
    let whole = degrees as i32;
    let hundredths = (((degrees - whole as f32) * 100.0) as i32).abs().min(99);
    let name: &'static str = status.into();
    format!("{}, {}.{:02}\r\n", name, whole, hundredths)
}

pub fn format(gravity: GravityVector, angle: TiltAngle, status: Status) -> Report {
    Report {
        debug: debug_line(gravity),
        status: status_line(angle, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::to_gravity;
    use tilt_traits::RawSample;

    fn angle(deg: f32) -> TiltAngle {
        TiltAngle::from_degrees(deg)
    }

    #[test]
    fn debug_values_truncate_toward_zero() {
        let line = debug_line(GravityVector::new(-0.006, -0.019, 0.0199));
        assert_eq!(line, "X=0 Y=-1 Z=1 | ");
    }

    #[test]
    fn debug_values_never_round() {
        // 4095 counts is 0.99975 g: rounding would print 100.
        for raw in (-8192i32..=8191).step_by(7) {
            let g = to_gravity(RawSample::new(raw as i16, 0, 0));
            assert_eq!(centi_g(g.x), (g.x * 100.0).trunc() as i32);
        }
        assert_eq!(centi_g(to_gravity(RawSample::new(4095, 0, 0)).x), 99);
        assert_eq!(centi_g(to_gravity(RawSample::new(-4095, 0, 0)).x), -99);
    }

    #[test]
    fn status_line_two_digit_fraction() {
        assert_eq!(status_line(angle(7.25), Status::Upright), "UPRIGHT, 7.25\r\n");
        assert_eq!(status_line(angle(0.0), Status::Upright), "UPRIGHT, 0.00\r\n");
        assert_eq!(status_line(angle(90.0), Status::Tipped), "TIPPED, 90.00\r\n");
        assert_eq!(status_line(angle(180.0), Status::Tipped), "TIPPED, 180.00\r\n");
        assert_eq!(status_line(angle(2.999), Status::Upright), "UPRIGHT, 2.99\r\n");
    }

    #[test]
    fn sign_lives_in_the_integer_part() {
        assert_eq!(status_line(angle(-1.5), Status::Upright), "UPRIGHT, -1.50\r\n");
        assert_eq!(status_line(angle(-0.3), Status::Upright), "UPRIGHT, 0.30\r\n");
    }

    #[test]
    fn report_lines_in_order() {
        let report = format(GravityVector::new(0.0, 0.0, 1.0), angle(0.0), Status::Upright);
        assert_eq!(report.lines(), ["X=0 Y=0 Z=100 | ", "UPRIGHT, 0.00\r\n"]);
    }

    #[test]
    fn banner_is_a_full_line() {
        assert!(BANNER.ends_with("\r\n"));
        assert!(!BANNER.contains(FIELD_SEPARATOR));
    }
}
