//! Accelerometer tip-over monitor.
//!
//! Each cycle reads one raw sample, scales it to g, measures the tilt of the
//! body z-axis from vertical and writes a two-part text record to a serial
//! sink. The sensor, the sink and the wait between cycles are collaborators
//! supplied by the caller.

pub mod acquire;
pub mod classify;
pub mod config;
pub mod monitor;
pub mod report;
pub mod serial;
pub mod telemetry;

pub use acquire::{to_gravity, Acquirer, SCALE_COUNTS_PER_G};
pub use classify::{classify, tilt_angle, Status, TiltAngle, TIP_THRESHOLD_DEG};
pub use config::MonitorConfig;
pub use monitor::{Cycles, Monitor, ThreadDelay};
pub use report::{Report, BANNER};
pub use serial::SerialLink;
pub use telemetry::{parse_line, TelemetryRecord};
pub use tilt_traits::{Accelerometer, Delay, GravityVector, RawSample, SerialSink, TiltError};

use tracing_subscriber::EnvFilter;

/// Console logging for the binaries; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
