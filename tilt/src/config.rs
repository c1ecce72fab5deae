use std::time::Duration;

/// Line rate of the report stream.
pub const BAUD_RATE: u32 = 115_200;

/// One sampling cycle per second.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(1000);

/// Where the monitor finds its collaborators on this host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub i2c_bus: String,
    pub serial_port: String,
    pub baud_rate: u32,
    pub period: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        let (i2c_bus, serial_port) = if cfg!(target_os = "linux") {
            ("/dev/i2c-1", "/dev/serial0")
        } else if cfg!(target_os = "macos") {
            // No I2C bus on a Mac; only useful for pointing the link at a USB adapter.
            ("", "/dev/tty.usbserial-0001")
        } else {
            ("", "")
        };

        MonitorConfig {
            i2c_bus: i2c_bus.to_string(),
            serial_port: serial_port.to_string(),
            baud_rate: BAUD_RATE,
            period: SAMPLE_PERIOD,
        }
    }
}

/// Default port for the downstream reader (USB CDC on the receiving host).
pub const READER_PORT: &str = "/dev/ttyACM0";
