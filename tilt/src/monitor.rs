use crate::acquire::Acquirer;
use crate::classify::classify;
use crate::report::{self, Report, BANNER};
use log::{debug, info};
use std::thread;
use std::time::Duration;
use tilt_traits::{Accelerometer, Delay, SerialSink, TiltError};

/// How many cycles one call to `Monitor::run` performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycles {
    /// Until a collaborator fails.
    Forever,
    Count(u64),
}

/// Sleeps the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Sample, classify, report, wait. One sensor, one sink, one thread.
pub struct Monitor<A: Accelerometer, S: SerialSink, D: Delay> {
    acquirer: Acquirer<A>,
    sink: S,
    delay: D,
    period: Duration,
    cycles_run: u64,
}

impl<A: Accelerometer, S: SerialSink, D: Delay> Monitor<A, S, D> {
    pub fn new(sensor: A, sink: S, delay: D, period: Duration) -> Self {
        Monitor {
            acquirer: Acquirer::new(sensor),
            sink,
            delay,
            period,
            cycles_run: 0,
        }
    }

    pub fn announce(&mut self) -> Result<(), TiltError> {
        self.sink.write_bytes(BANNER.as_bytes())
    }

    /// Runs a single cycle without waiting afterwards.
    pub fn step(&mut self) -> Result<Report, TiltError> {
        let gravity = self.acquirer.acquire()?;
        let (angle, status) = classify(gravity);
        debug!("cycle {}: {} -> {} {}", self.cycles_run, gravity, angle, status);

        let report = report::format(gravity, angle, status);
        for line in report.lines() {
            self.sink.write_bytes(line.as_bytes())?;
        }
        self.cycles_run += 1;
        Ok(report)
    }

    /// Writes the banner, then cycles at the configured period. Stops at the
    /// first collaborator failure.
    pub fn run(&mut self, cycles: Cycles) -> Result<(), TiltError> {
        info!("Monitoring started, period {:?}", self.period);
        self.announce()?;

        let mut done: u64 = 0;
        loop {
            if let Cycles::Count(n) = cycles {
                if done >= n {
                    return Ok(());
                }
            }
            self.step()?;
            done += 1;
            self.delay.delay(self.period);
        }
    }

    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }

    pub fn into_parts(self) -> (A, S, D) {
        (self.acquirer.into_inner(), self.sink, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Level;

    impl Accelerometer for Level {
        fn read_raw_x(&mut self) -> Result<i16, TiltError> {
            Ok(0)
        }

        fn read_raw_y(&mut self) -> Result<i16, TiltError> {
            Ok(0)
        }

        fn read_raw_z(&mut self) -> Result<i16, TiltError> {
            Ok(4096)
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        waits: Vec<Duration>,
    }

    impl Delay for CountingDelay {
        fn delay(&mut self, duration: Duration) {
            self.waits.push(duration);
        }
    }

    #[test]
    fn step_writes_both_lines_and_no_banner() {
        let mut monitor = Monitor::new(Level, Vec::<u8>::new(), CountingDelay::default(), Duration::from_secs(1));
        let report = monitor.step().unwrap();
        assert_eq!(report.debug, "X=0 Y=0 Z=100 | ");
        let (_, sink, delay) = monitor.into_parts();
        assert_eq!(String::from_utf8(sink).unwrap(), "X=0 Y=0 Z=100 | UPRIGHT, 0.00\r\n");
        assert!(delay.waits.is_empty());
    }

    #[test]
    fn run_counts_cycles_and_waits_after_each() {
        let mut monitor = Monitor::new(Level, Vec::<u8>::new(), CountingDelay::default(), Duration::from_millis(1000));
        monitor.run(Cycles::Count(3)).unwrap();
        assert_eq!(monitor.cycles_run(), 3);

        let (_, sink, delay) = monitor.into_parts();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with(BANNER));
        assert_eq!(text.matches("UPRIGHT, 0.00\r\n").count(), 3);
        assert_eq!(delay.waits, vec![Duration::from_millis(1000); 3]);
    }

    #[test]
    fn count_is_per_run_call() {
        let mut monitor = Monitor::new(Level, Vec::<u8>::new(), CountingDelay::default(), Duration::from_secs(1));
        monitor.step().unwrap();
        monitor.run(Cycles::Count(2)).unwrap();
        assert_eq!(monitor.cycles_run(), 3);

        let (_, sink, delay) = monitor.into_parts();
        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text.matches("UPRIGHT, 0.00\r\n").count(), 3);
        assert_eq!(delay.waits.len(), 2);
    }

    #[test]
    fn zero_cycles_only_announces() {
        let mut monitor = Monitor::new(Level, Vec::<u8>::new(), CountingDelay::default(), Duration::from_secs(1));
        monitor.run(Cycles::Count(0)).unwrap();
        let (_, sink, _) = monitor.into_parts();
        assert_eq!(sink, BANNER.as_bytes());
    }
}
