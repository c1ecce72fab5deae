mod registers;
use byteorder::{BigEndian, ByteOrder};
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use log::{debug, error};
use num_traits::FromPrimitive;
pub use registers::{CtrlReg1, FullScaleRange};
use registers::{
    ConfigRegisters, Constants, OutputRegisters, StatusRegisters, FULL_SCALE_MASK,
};
use std::fmt;
// Import types from the shared traits crate
use tilt_traits::{Accelerometer, TiltError};

pub const DEFAULT_ADDR: u16 = Constants::DefaultI2cAddr as u16;

/// Errors for MMA8451Q operations.
#[derive(Debug)]
pub enum Error<E> {
    I2c(E),
    InvalidChipId(u8),
    UnknownRange(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::I2c(err)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {}", e),
            Error::InvalidChipId(id) => write!(
                f,
                "Invalid chip ID. Expected {:#04x}, got {:#04x}",
                Constants::ChipId as u8,
                id
            ),
            Error::UnknownRange(bits) => write!(f, "Unknown full-scale bits {:#04x}", bits),
        }
    }
}

// Map local Error to TiltError
impl<E: fmt::Display> From<Error<E>> for TiltError {
    fn from(err: Error<E>) -> Self {
        match err {
            Error::I2c(e) => TiltError::DeviceError(format!("I2C error: {}", e)),
            other @ Error::InvalidChipId(_) => TiltError::ConfigurationError(other.to_string()),
            other @ Error::UnknownRange(_) => TiltError::ConfigurationError(other.to_string()),
        }
    }
}

/// Combines an output register pair into a signed 14-bit count.
pub fn decode_sample(msb: u8, lsb: u8) -> i16 {
    BigEndian::read_i16(&[msb, lsb]) >> 2
}

/// Low-level MMA8451Q driver, configured for the ±2g range.
pub struct Mma8451q<D: I2CDevice> {
    i2c: D,
    range: FullScaleRange,
}

impl Mma8451q<LinuxI2CDevice> {
    /// Opens the accelerometer at its default address on the given I2C bus.
    ///
    /// # Arguments
    /// * `i2c_bus` - The I2C bus path (e.g., "/dev/i2c-1")
    pub fn new(i2c_bus: &str) -> Result<Self, Error<i2cdev::linux::LinuxI2CError>> {
        debug!("Initializing Mma8451q on {}...", i2c_bus);
        let i2c = LinuxI2CDevice::new(i2c_bus, DEFAULT_ADDR)?;
        Self::from_device(i2c)
    }
}

impl<D: I2CDevice> Mma8451q<D> {
    /// Verifies the chip and brings it up in active mode at ±2g.
    pub fn from_device(i2c: D) -> Result<Self, Error<D::Error>> {
        let mut mma = Mma8451q {
            i2c,
            range: FullScaleRange::G2,
        };

        mma.verify_chip_id()?;

        // Range can only be changed in standby.
        mma.standby()?;
        mma.i2c.smbus_write_byte_data(
            ConfigRegisters::XyzDataCfg as u8,
            FullScaleRange::G2 as u8,
        )?;
        mma.i2c.smbus_write_byte_data(
            ConfigRegisters::CtrlReg1 as u8,
            CtrlReg1::active_low_noise().bits(),
        )?;

        mma.range = mma.read_range()?;
        debug!("Mma8451q active, range {:?}", mma.range);
        Ok(mma)
    }

    fn verify_chip_id(&mut self) -> Result<(), Error<D::Error>> {
        let chip_id = self.i2c.smbus_read_byte_data(StatusRegisters::WhoAmI as u8)?;
        if chip_id != Constants::ChipId as u8 {
            error!("Invalid chip ID. Expected 0x1A, got {:#x}", chip_id);
            return Err(Error::InvalidChipId(chip_id));
        }
        debug!("Mma8451q chip ID verified: 0x{:02X}", chip_id);
        Ok(())
    }

    pub fn standby(&mut self) -> Result<(), Error<D::Error>> {
        let ctrl = self.ctrl_reg1()?;
        self.i2c.smbus_write_byte_data(
            ConfigRegisters::CtrlReg1 as u8,
            (ctrl - CtrlReg1::ACTIVE).bits(),
        )?;
        Ok(())
    }

    pub fn ctrl_reg1(&mut self) -> Result<CtrlReg1, Error<D::Error>> {
        let bits = self.i2c.smbus_read_byte_data(ConfigRegisters::CtrlReg1 as u8)?;
        Ok(CtrlReg1::from_bits_retain(bits))
    }

    pub fn read_range(&mut self) -> Result<FullScaleRange, Error<D::Error>> {
        let cfg = self.i2c.smbus_read_byte_data(ConfigRegisters::XyzDataCfg as u8)?;
        FullScaleRange::from_u8(cfg & FULL_SCALE_MASK).ok_or(Error::UnknownRange(cfg))
    }

    pub fn range(&self) -> FullScaleRange {
        self.range
    }

    fn read_axis(&mut self, msb: OutputRegisters, lsb: OutputRegisters) -> Result<i16, Error<D::Error>> {
        let hi = self.i2c.smbus_read_byte_data(msb as u8)?;
        let lo = self.i2c.smbus_read_byte_data(lsb as u8)?;
        Ok(decode_sample(hi, lo))
    }
}

impl<D> Accelerometer for Mma8451q<D>
where
    D: I2CDevice,
    D::Error: fmt::Display,
{
    fn read_raw_x(&mut self) -> Result<i16, TiltError> {
        Ok(self.read_axis(OutputRegisters::XMsb, OutputRegisters::XLsb)?)
    }

    fn read_raw_y(&mut self) -> Result<i16, TiltError> {
        Ok(self.read_axis(OutputRegisters::YMsb, OutputRegisters::YLsb)?)
    }

    fn read_raw_z(&mut self) -> Result<i16, TiltError> {
        Ok(self.read_axis(OutputRegisters::ZMsb, OutputRegisters::ZLsb)?)
    }
}
