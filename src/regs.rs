//! Bit layout of the timer register block.
//!
//! Every field is accessed through explicit mask/shift helpers on the raw
//! 16-bit register word; nothing here touches hardware.

use crate::Error;

/// Clock source feeding the counter (`TASSEL` field).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockSource {
    /// External clock pin.
    Taclk = 0,
    /// Auxiliary clock.
    Aclk = 1,
    /// Sub-system master clock.
    Smclk = 2,
    /// Inverted external clock.
    Inclk = 3,
}

impl ClockSource {
    #[inline]
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => ClockSource::Taclk,
            1 => ClockSource::Aclk,
            2 => ClockSource::Smclk,
            _ => ClockSource::Inclk,
        }
    }
}

/// Input clock divider (`ID` field).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockDivider {
    Div1 = 0,
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
}

impl ClockDivider {
    #[inline]
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => ClockDivider::Div1,
            1 => ClockDivider::Div2,
            2 => ClockDivider::Div4,
            _ => ClockDivider::Div8,
        }
    }
}

/// Counting mode (`MC` field).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Counter halted.
    Stop = 0,
    /// Count up to the period threshold, then wrap to zero.
    Up = 1,
    /// Count up to `0xffff`, then wrap to zero.
    Continuous = 2,
    /// Count up to the period threshold, then back down to zero.
    UpDown = 3,
}

impl Mode {
    #[inline]
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0 => Mode::Stop,
            1 => Mode::Up,
            2 => Mode::Continuous,
            _ => Mode::UpDown,
        }
    }
}

/// Output behavior of a channel on compare match (`OUTMOD` field).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Output follows the output bit directly.
    OutBit = 0,
    Set = 1,
    ToggleReset = 2,
    SetReset = 3,
    Toggle = 4,
    Reset = 5,
    ToggleSet = 6,
    ResetSet = 7,
}

impl OutputMode {
    #[inline]
    pub(crate) fn from_bits(bits: u16) -> Self {
        match bits & 0b111 {
            0 => OutputMode::OutBit,
            1 => OutputMode::Set,
            2 => OutputMode::ToggleReset,
            3 => OutputMode::SetReset,
            4 => OutputMode::Toggle,
            5 => OutputMode::Reset,
            6 => OutputMode::ToggleSet,
            _ => OutputMode::ResetSet,
        }
    }
}

/// Capture/compare channel selector.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    C0 = 0,
    C1 = 1,
    C2 = 2,
}

impl Channel {
    /// Bounds-checked conversion from a raw channel index.
    #[inline]
    pub fn from_index(index: u8) -> Result<Self, Error> {
        match index {
            0 => Ok(Channel::C0),
            1 => Ok(Channel::C1),
            2 => Ok(Channel::C2),
            _ => Err(Error::InvalidChannel(index)),
        }
    }
}

/// Control register fields.
pub mod ctl {
    use super::{ClockDivider, ClockSource, Mode};

    pub const TASSEL_SHIFT: u16 = 8;
    pub const TASSEL_MASK: u16 = 0b11 << TASSEL_SHIFT;
    pub const ID_SHIFT: u16 = 6;
    pub const ID_MASK: u16 = 0b11 << ID_SHIFT;
    pub const MC_SHIFT: u16 = 4;
    pub const MC_MASK: u16 = 0b11 << MC_SHIFT;
    /// Counter/prescaler clear request, write-1 self-clearing.
    pub const TACLR: u16 = 1 << 2;
    /// Timer interrupt enable.
    pub const TAIE: u16 = 1 << 1;
    /// Timer interrupt pending flag.
    pub const TAIFG: u16 = 1 << 0;

    #[inline]
    pub fn with_clock_source(word: u16, source: ClockSource) -> u16 {
        (word & !TASSEL_MASK) | ((source as u16) << TASSEL_SHIFT)
    }

    #[inline]
    pub fn clock_source(word: u16) -> ClockSource {
        ClockSource::from_bits((word & TASSEL_MASK) >> TASSEL_SHIFT)
    }

    #[inline]
    pub fn with_divider(word: u16, divider: ClockDivider) -> u16 {
        (word & !ID_MASK) | ((divider as u16) << ID_SHIFT)
    }

    #[inline]
    pub fn divider(word: u16) -> ClockDivider {
        ClockDivider::from_bits((word & ID_MASK) >> ID_SHIFT)
    }

    #[inline]
    pub fn with_mode(word: u16, mode: Mode) -> u16 {
        (word & !MC_MASK) | ((mode as u16) << MC_SHIFT)
    }

    #[inline]
    pub fn mode(word: u16) -> Mode {
        Mode::from_bits((word & MC_MASK) >> MC_SHIFT)
    }
}

/// Channel control register fields.
pub mod cctl {
    use super::OutputMode;

    pub const CM_SHIFT: u16 = 14;
    pub const CM_MASK: u16 = 0b11 << CM_SHIFT;
    pub const CCIS_SHIFT: u16 = 12;
    pub const CCIS_MASK: u16 = 0b11 << CCIS_SHIFT;
    /// Synchronize capture source.
    pub const SCS: u16 = 1 << 11;
    /// Synchronized capture/compare input.
    pub const SCCI: u16 = 1 << 10;
    /// Capture mode when set, compare mode when clear.
    pub const CAP: u16 = 1 << 8;
    pub const OUTMOD_SHIFT: u16 = 5;
    pub const OUTMOD_MASK: u16 = 0b111 << OUTMOD_SHIFT;
    /// Channel interrupt enable.
    pub const CCIE: u16 = 1 << 4;
    /// Capture/compare input level.
    pub const CCI: u16 = 1 << 3;
    /// Output bit, drives the pin in [`OutputMode::OutBit`].
    pub const OUT: u16 = 1 << 2;
    /// Capture overflow flag.
    pub const COV: u16 = 1 << 1;
    /// Channel interrupt pending flag.
    pub const CCIFG: u16 = 1 << 0;

    /// Fields only meaningful in capture mode.
    pub const CAPTURE_FIELDS: u16 = CM_MASK | CCIS_MASK | SCS | SCCI;

    #[inline]
    pub fn with_output_mode(word: u16, mode: OutputMode) -> u16 {
        (word & !OUTMOD_MASK) | ((mode as u16) << OUTMOD_SHIFT)
    }

    #[inline]
    pub fn output_mode(word: u16) -> OutputMode {
        OutputMode::from_bits((word & OUTMOD_MASK) >> OUTMOD_SHIFT)
    }
}
