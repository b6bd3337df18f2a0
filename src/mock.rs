//! In-memory register file for host tests.

use crate::backend::TimerRegisters;
use crate::regs::{ctl, Channel};

/// One logged register write, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Write {
    Ctl(u16),
    Cctl(Channel, u16),
    Ccr(Channel, u16),
}

/// Mock register block that records every write.
///
/// Emulates the write-1 self-clearing behavior of the counter-clear request:
/// writing the bit zeroes the counter and the bit reads back as zero. The
/// logged value is the raw word as written.
#[derive(Debug, Default)]
pub struct Registers {
    pub ctl: u16,
    pub counter: u16,
    pub cctl: [u16; 3],
    pub ccr: [u16; 3],
    pub writes: Vec<Write>,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counter, standing in for the hardware clock.
    pub fn tick(&mut self, cycles: u16) {
        self.counter = self.counter.wrapping_add(cycles);
    }
}

impl TimerRegisters for Registers {
    fn read_ctl(&self) -> u16 {
        self.ctl
    }

    fn write_ctl(&mut self, value: u16) {
        self.writes.push(Write::Ctl(value));
        if value & ctl::TACLR != 0 {
            self.counter = 0;
        }
        self.ctl = value & !ctl::TACLR;
    }

    fn read_counter(&self) -> u16 {
        self.counter
    }

    fn read_cctl(&self, channel: Channel) -> u16 {
        self.cctl[channel as usize]
    }

    fn write_cctl(&mut self, channel: Channel, value: u16) {
        self.writes.push(Write::Cctl(channel, value));
        self.cctl[channel as usize] = value;
    }

    fn read_ccr(&self, channel: Channel) -> u16 {
        self.ccr[channel as usize]
    }

    fn write_ccr(&mut self, channel: Channel, value: u16) {
        self.writes.push(Write::Ccr(channel, value));
        self.ccr[channel as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{Registers, Write};
    use crate::backend::TimerRegisters;
    use crate::regs::ctl;

    #[test]
    fn clear_request_self_clears() {
        let mut regs = Registers::new();
        regs.tick(1234);
        regs.write_ctl(ctl::TACLR | ctl::TAIE);
        assert_eq!(regs.counter, 0);
        assert_eq!(regs.ctl, ctl::TAIE);
        assert_eq!(regs.writes, vec![Write::Ctl(ctl::TACLR | ctl::TAIE)]);
    }
}
