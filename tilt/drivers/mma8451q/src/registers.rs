use bitflags::bitflags;
use num_derive::{FromPrimitive, ToPrimitive};

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum StatusRegisters {
    WhoAmI = 0x0D,
}

/// Output registers, MSB first, 14-bit left-justified.
#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum OutputRegisters {
    XMsb = 0x01,
    XLsb = 0x02,
    YMsb = 0x03,
    YLsb = 0x04,
    ZMsb = 0x05,
    ZLsb = 0x06,
}

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum ConfigRegisters {
    XyzDataCfg = 0x0E,
    CtrlReg1 = 0x2A,
}

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive)]
pub enum Constants {
    DefaultI2cAddr = 0x1D,
    ChipId = 0x1A,
}

/// `XYZ_DATA_CFG` FS bits. Only ±2g is supported; other settings read back
/// as `Error::UnknownRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum FullScaleRange {
    G2 = 0x00,
}

bitflags! {
    /// `CTRL_REG1` bits. Data rate lives in bits 3..=5.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CtrlReg1: u8 {
        const ACTIVE = 0x01;
        const F_READ = 0x02;
        const LNOISE = 0x04;
        const DR0 = 0x08;
        const DR1 = 0x10;
        const DR2 = 0x20;
    }
}

impl CtrlReg1 {
    /// 800 Hz output rate (DR = 000), low-noise, full 14-bit reads.
    pub fn active_low_noise() -> Self {
        CtrlReg1::ACTIVE | CtrlReg1::LNOISE
    }
}

pub const FULL_SCALE_MASK: u8 = 0x03;
