use std::process::ExitCode;
use tilt::TiltError;
use tracing::{error, info};

#[cfg(target_os = "linux")]
fn run() -> Result<(), TiltError> {
    use mma8451q::Mma8451q;
    use tilt::{Cycles, Monitor, MonitorConfig, SerialLink, ThreadDelay};

    let config = MonitorConfig::default();

    let sensor = Mma8451q::new(&config.i2c_bus)?;
    info!("Accelerometer ready on {} ({:?})", config.i2c_bus, sensor.range());

    let link = SerialLink::open(&config.serial_port, config.baud_rate)?;
    info!(
        "Reporting on {} @ {} baud",
        link.name().unwrap_or_else(|| config.serial_port.clone()),
        config.baud_rate
    );

    Monitor::new(sensor, link, ThreadDelay, config.period).run(Cycles::Forever)
}

#[cfg(not(target_os = "linux"))]
fn run() -> Result<(), TiltError> {
    Err(TiltError::ConfigurationError(format!(
        "Unsupported OS: {}",
        std::env::consts::OS
    )))
}

fn main() -> ExitCode {
    tilt::init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Monitor stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
