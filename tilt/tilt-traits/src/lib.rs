use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::time::Duration;

// --- Basic Types ---

/// One reading straight off the accelerometer, in the driver's native counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        RawSample { x, y, z }
    }
}

impl fmt::Display for RawSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawSample(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

/// Acceleration including gravity, in units of standard gravity (g).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GravityVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl GravityVector {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        GravityVector { x, y, z }
    }

    /// Nominally ~1.0 when the device is at rest.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl fmt::Display for GravityVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GravityVector(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}

// --- Standard Error Type ---
#[derive(Debug)]
pub enum TiltError {
    /// Error originating from the underlying device communication (I2C, Serial)
    DeviceError(String),
    /// Error reading a sample from the device
    ReadError(String),
    /// Error writing to the serial link
    WriteError(String),
    /// Error during device configuration or setup
    ConfigurationError(String),
    /// A received report line did not match the wire format
    ParseError(String),
    /// Catch-all for other errors
    Other(String),
}

impl fmt::Display for TiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiltError::DeviceError(s) => write!(f, "Device error: {}", s),
            TiltError::ReadError(s) => write!(f, "Read error: {}", s),
            TiltError::WriteError(s) => write!(f, "Write error: {}", s),
            TiltError::ConfigurationError(s) => write!(f, "Configuration error: {}", s),
            TiltError::ParseError(s) => write!(f, "Parse error: {}", s),
            TiltError::Other(s) => write!(f, "Other tilt error: {}", s),
        }
    }
}

impl StdError for TiltError {}

impl From<io::Error> for TiltError {
    fn from(err: io::Error) -> Self {
        TiltError::WriteError(err.to_string())
    }
}

impl From<serialport::Error> for TiltError {
    fn from(err: serialport::Error) -> Self {
        TiltError::DeviceError(format!("Serial port error: {}", err))
    }
}

// --- Collaborators ---

/// Source of raw accelerometer samples.
pub trait Accelerometer {
    fn read_raw_x(&mut self) -> Result<i16, TiltError>;

    fn read_raw_y(&mut self) -> Result<i16, TiltError>;

    fn read_raw_z(&mut self) -> Result<i16, TiltError>;

    /// Reads all three axes in x, y, z order.
    fn read_raw(&mut self) -> Result<RawSample, TiltError> {
        Ok(RawSample {
            x: self.read_raw_x()?,
            y: self.read_raw_y()?,
            z: self.read_raw_z()?,
        })
    }
}

/// Blocking, one-way byte sink (the serial transport).
pub trait SerialSink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TiltError>;
}

impl<W: io::Write> SerialSink for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), TiltError> {
        self.write_all(bytes)?;
        self.flush()?;
        Ok(())
    }
}

/// Blocking wait between sampling cycles.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(i16, i16, i16);

    impl Accelerometer for Fixed {
        fn read_raw_x(&mut self) -> Result<i16, TiltError> {
            Ok(self.0)
        }

        fn read_raw_y(&mut self) -> Result<i16, TiltError> {
            Ok(self.1)
        }

        fn read_raw_z(&mut self) -> Result<i16, TiltError> {
            Err(TiltError::ReadError(format!("z unavailable ({})", self.2)))
        }
    }

    #[test]
    fn read_raw_propagates_axis_failure() {
        let mut sensor = Fixed(1, 2, 3);
        assert_eq!(sensor.read_raw_x().unwrap(), 1);
        match sensor.read_raw() {
            Err(TiltError::ReadError(msg)) => assert!(msg.contains("z unavailable")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn io_sink_writes_all_bytes() {
        let mut sink: Vec<u8> = Vec::new();
        sink.write_bytes(b"X=0 ").unwrap();
        sink.write_bytes(b"Y=0\r\n").unwrap();
        assert_eq!(sink, b"X=0 Y=0\r\n");
    }

    #[test]
    fn magnitude_of_unit_axis() {
        assert!((GravityVector::new(0.0, 0.0, -1.0).magnitude() - 1.0).abs() < 1e-6);
        assert_eq!(GravityVector::default().magnitude(), 0.0);
    }

    #[test]
    fn error_display_carries_context() {
        let err = TiltError::DeviceError("bus 1".to_string());
        assert_eq!(err.to_string(), "Device error: bus 1");
    }
}
