use log::debug;
use tilt_traits::{Accelerometer, GravityVector, RawSample, TiltError};

/// Counts per g for 14-bit samples at the ±2g full-scale range.
pub const SCALE_COUNTS_PER_G: f32 = 4096.0;

/// Converts native counts to g.
pub fn to_gravity(raw: RawSample) -> GravityVector {
    GravityVector {
        x: raw.x as f32 / SCALE_COUNTS_PER_G,
        y: raw.y as f32 / SCALE_COUNTS_PER_G,
        z: raw.z as f32 / SCALE_COUNTS_PER_G,
    }
}

/// Pulls one sample per call from the accelerometer and scales it to g.
pub struct Acquirer<A: Accelerometer> {
    sensor: A,
}

impl<A: Accelerometer> Acquirer<A> {
    pub fn new(sensor: A) -> Self {
        Acquirer { sensor }
    }

    /// Driver failures are passed through untouched.
    pub fn acquire(&mut self) -> Result<GravityVector, TiltError> {
        let raw = self.sensor.read_raw()?;
        debug!("{}", raw);
        Ok(to_gravity(raw))
    }

    pub fn into_inner(self) -> A {
        self.sensor
    }
}
