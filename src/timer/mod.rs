mod pwm;
mod timer;

pub use crate::regs::{Channel, ClockDivider, ClockSource, Mode, OutputMode};
pub use pwm::Pwm;
pub use timer::{ChannelConfig, PwmConfig, Timer, TimerConfig};
