//! Register access seam between the timer logic and the hardware.

use crate::regs::Channel;

/// Raw 16-bit access to the timer register block.
///
/// Production code binds this to the memory-mapped block via [`Mmio`]; tests
/// bind it to an in-memory register file. Implementations only move words,
/// all field logic lives in [`crate::regs`] and [`crate::timer`].
pub trait TimerRegisters {
    fn read_ctl(&self) -> u16;
    fn write_ctl(&mut self, value: u16);

    /// Live value of the free-running counter. Advances asynchronously with
    /// respect to software, so two reads in a row may differ.
    fn read_counter(&self) -> u16;

    fn read_cctl(&self, channel: Channel) -> u16;
    fn write_cctl(&mut self, channel: Channel, value: u16);

    fn read_ccr(&self, channel: Channel) -> u16;
    fn write_ccr(&mut self, channel: Channel, value: u16);
}

/// Byte offsets of the registers within the peripheral block.
mod offset {
    pub const CTL: usize = 0x00;
    pub const CCTL: [usize; 3] = [0x02, 0x04, 0x06];
    pub const COUNTER: usize = 0x10;
    pub const CCR: [usize; 3] = [0x12, 0x14, 0x16];
}

/// Memory-mapped register block at a platform-supplied base address.
#[derive(Debug)]
pub struct Mmio {
    base: *mut u16,
}

impl Mmio {
    /// Creates a backend over the register block starting at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point at the timer's register block, and the caller must
    /// guarantee no other code accesses the block while this value lives.
    #[inline]
    pub const unsafe fn new(base: *mut u16) -> Self {
        Self { base }
    }

    #[inline]
    fn reg(&self, byte_offset: usize) -> *mut u16 {
        // The block is an array of 16-bit registers, offsets are even.
        unsafe { self.base.add(byte_offset / 2) }
    }

    #[inline]
    fn read(&self, byte_offset: usize) -> u16 {
        unsafe { self.reg(byte_offset).read_volatile() }
    }

    #[inline]
    fn write(&mut self, byte_offset: usize, value: u16) {
        unsafe { self.reg(byte_offset).write_volatile(value) }
    }
}

impl TimerRegisters for Mmio {
    #[inline]
    fn read_ctl(&self) -> u16 {
        self.read(offset::CTL)
    }

    #[inline]
    fn write_ctl(&mut self, value: u16) {
        self.write(offset::CTL, value);
    }

    #[inline]
    fn read_counter(&self) -> u16 {
        self.read(offset::COUNTER)
    }

    #[inline]
    fn read_cctl(&self, channel: Channel) -> u16 {
        self.read(offset::CCTL[channel as usize])
    }

    #[inline]
    fn write_cctl(&mut self, channel: Channel, value: u16) {
        self.write(offset::CCTL[channel as usize], value);
    }

    #[inline]
    fn read_ccr(&self, channel: Channel) -> u16 {
        self.read(offset::CCR[channel as usize])
    }

    #[inline]
    fn write_ccr(&mut self, channel: Channel, value: u16) {
        self.write(offset::CCR[channel as usize], value);
    }
}

#[cfg(test)]
mod tests {
    use super::{Mmio, TimerRegisters};
    use crate::regs::Channel;

    // 0x00..=0x16 as 16-bit words.
    const WORDS: usize = 12;

    #[test]
    fn register_offsets() {
        let mut block = [0u16; WORDS];
        let mut mmio = unsafe { Mmio::new(block.as_mut_ptr()) };

        mmio.write_ctl(0x1234);
        mmio.write_cctl(Channel::C0, 0x0a0a);
        mmio.write_cctl(Channel::C1, 0x0b0b);
        mmio.write_cctl(Channel::C2, 0x0c0c);
        mmio.write_ccr(Channel::C0, 1000);
        mmio.write_ccr(Channel::C1, 500);
        mmio.write_ccr(Channel::C2, 250);

        assert_eq!(block[0x00 / 2], 0x1234);
        assert_eq!(block[0x02 / 2], 0x0a0a);
        assert_eq!(block[0x04 / 2], 0x0b0b);
        assert_eq!(block[0x06 / 2], 0x0c0c);
        assert_eq!(block[0x12 / 2], 1000);
        assert_eq!(block[0x14 / 2], 500);
        assert_eq!(block[0x16 / 2], 250);
    }

    #[test]
    fn counter_reads_live_word() {
        let mut block = [0u16; WORDS];
        block[0x10 / 2] = 0xbeef;
        let mmio = unsafe { Mmio::new(block.as_mut_ptr()) };
        assert_eq!(mmio.read_counter(), 0xbeef);
    }
}
