use log::debug;
use serialport::{DataBits, Parity, SerialPort, StopBits};
use std::io::{self, Read, Write};
use std::time::Duration;
use tilt_traits::TiltError;

/// Serial port carrying the report stream, 8N1.
pub struct SerialLink {
    serial_port: Box<dyn SerialPort>,
}

impl SerialLink {
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Self, TiltError> {
        let serial_port = serialport::new(port_name, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(Duration::from_secs(2))
            .open()?;
        debug!("Opened port: {} @ {} baud", port_name, baud_rate);
        Ok(SerialLink { serial_port })
    }

    pub fn name(&self) -> Option<String> {
        self.serial_port.name()
    }

    /// Drops anything received before the reader attached.
    pub fn clear_input(&mut self) -> Result<(), TiltError> {
        self.serial_port.clear(serialport::ClearBuffer::Input)?;
        Ok(())
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.serial_port.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.serial_port.flush()
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.serial_port.read(buf)
    }
}
