use clap::Parser;
use std::io::{BufRead, BufReader, ErrorKind};
use std::thread;
use std::time::Duration;
use tilt::config::{BAUD_RATE, READER_PORT};
use tilt::{parse_line, SerialLink, TiltError};
use tracing::{error, info, warn};

/// Reads the tilt report stream and flags tip-overs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Serial port the monitor is attached to
    #[arg(long, default_value = READER_PORT)]
    port: String,

    /// Line rate
    #[arg(long, default_value_t = BAUD_RATE)]
    baud: u32,
}

fn main() -> Result<(), TiltError> {
    tilt::init_tracing();
    let args = Args::parse();

    let mut link = SerialLink::open(&args.port, args.baud)?;
    info!("Connected to {} @ {} bps", args.port, args.baud);

    // Let the board settle, then drop whatever was half-sent.
    thread::sleep(Duration::from_secs(2));
    link.clear_input()?;

    let mut reader = BufReader::new(link);
    let mut line = String::new();
    let mut received: u64 = 0;

    loop {
        // A timed-out read keeps its partial line for the next attempt.
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Port closed after {} records", received);
                return Ok(());
            }
            Ok(_) => {
                match parse_line(&line) {
                    Some(Ok(record)) => {
                        received += 1;
                        info!(
                            "[{:04}] X={:4} Y={:4} Z={:4} | {} | {:+7.2}°",
                            received, record.x, record.y, record.z, record.status, record.angle
                        );
                        if record.is_tip_over() {
                            warn!("Tip-over detected at {:.2}°", record.angle);
                        }
                    }
                    Some(Err(e)) => warn!("{}", e),
                    None => info!("{}", line.trim()),
                }
                line.clear();
            }
            Err(e) if e.kind() == ErrorKind::TimedOut => continue,
            Err(e) => {
                error!("Error reading from serial port: {}", e);
                line.clear();
                thread::sleep(Duration::from_secs(1));
            }
        }
    }
}
