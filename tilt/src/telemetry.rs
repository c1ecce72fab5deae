//! Receiving side of the report stream.

use crate::classify::{Status, TIP_THRESHOLD_DEG};
use crate::report::FIELD_SEPARATOR;
use std::str::FromStr;
use tilt_traits::TiltError;

/// One parsed record line. Axis values are hundredths of a g.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub status: Status,
    pub angle: f32,
}

impl TelemetryRecord {
    /// Trusts either the sender's status or the reported angle.
    pub fn is_tip_over(&self) -> bool {
        self.status == Status::Tipped || self.angle.abs() > TIP_THRESHOLD_DEG
    }
}

fn parse_err(line: &str, what: &str) -> TiltError {
    TiltError::ParseError(format!("{} in {:?}", what, line))
}

impl FromStr for TelemetryRecord {
    type Err = TiltError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (axes, status_part) = line
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| parse_err(line, "missing separator"))?;

        let (mut x, mut y, mut z) = (None, None, None);
        for field in axes.split_whitespace() {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| parse_err(line, "malformed axis field"))?;
            let value: i32 = value
                .parse()
                .map_err(|_| parse_err(line, "non-integer axis value"))?;
            match key {
                "X" => x = Some(value),
                "Y" => y = Some(value),
                "Z" => z = Some(value),
                _ => return Err(parse_err(line, "unknown axis")),
            }
        }

        let (status, angle) = status_part
            .split_once(',')
            .ok_or_else(|| parse_err(line, "missing angle"))?;
        let status = Status::from_str(status.trim()).map_err(|_| parse_err(line, "unknown status"))?;
        let angle: f32 = angle
            .trim()
            .parse()
            .map_err(|_| parse_err(line, "non-numeric angle"))?;

        Ok(TelemetryRecord {
            x: x.ok_or_else(|| parse_err(line, "missing X"))?,
            y: y.ok_or_else(|| parse_err(line, "missing Y"))?,
            z: z.ok_or_else(|| parse_err(line, "missing Z"))?,
            status,
            angle,
        })
    }
}

/// `None` for lines that are not records (banner, blank lines).
pub fn parse_line(line: &str) -> Option<Result<TelemetryRecord, TiltError>> {
    let line = line.trim();
    if !line.contains(FIELD_SEPARATOR) {
        return None;
    }
    Some(line.parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::BANNER;

    #[test]
    fn parses_a_record() {
        let record = parse_line("X=2 Y=-5 Z=98 | UPRIGHT, 7.25\r\n").unwrap().unwrap();
        assert_eq!((record.x, record.y, record.z), (2, -5, 98));
        assert_eq!(record.status, Status::Upright);
        assert!((record.angle - 7.25).abs() < 1e-4);
        assert!(!record.is_tip_over());
    }

    #[test]
    fn tipped_status_alerts() {
        let record = parse_line("X=100 Y=0 Z=0 | TIPPED, 90.00").unwrap().unwrap();
        assert!(record.is_tip_over());
    }

    #[test]
    fn large_angle_alerts_even_if_upright() {
        let record: TelemetryRecord = "X=0 Y=0 Z=0 | UPRIGHT, -46.10".parse().unwrap();
        assert!(record.is_tip_over());
    }

    #[test]
    fn banner_and_blank_lines_are_skipped() {
        assert!(parse_line(BANNER).is_none());
        assert!(parse_line("\r\n").is_none());
    }

    #[test]
    fn malformed_records_are_errors() {
        for line in [
            "X=1 Y=2 | UPRIGHT, 0.00",
            "X=1 Y=2 Z=a | UPRIGHT, 0.00",
            "X=1 Y=2 Z=3 | SIDEWAYS, 0.00",
            "X=1 Y=2 Z=3 | UPRIGHT",
            "X=1 Y=2 W=3 | UPRIGHT, 0.00",
        ] {
            match parse_line(line) {
                Some(Err(TiltError::ParseError(_))) => {}
                other => panic!("{:?} parsed as {:?}", line, other),
            }
        }
    }
}
