use crate::backend::TimerRegisters;
use crate::regs::{cctl, ctl, Channel, ClockDivider, ClockSource, Mode, OutputMode};

/// Full timer configuration, applied as one glitch-free sequence.
#[derive(Copy, Clone, Debug)]
pub struct TimerConfig {
    pub clock_source: ClockSource,
    pub divider: ClockDivider,
    pub mode: Mode,
    /// Top counting threshold, meaningful in up and up/down modes.
    pub period: u16,
    pub enable_interrupt: bool,
}

impl TimerConfig {
    #[inline]
    pub fn make<B: TimerRegisters>(self, regs: B) -> Timer<B> {
        let mut timer = Timer::new(regs);
        timer.apply_config(&self);
        timer
    }
}

/// Configuration of a single capture/compare channel, in compare mode.
#[derive(Copy, Clone, Debug)]
pub struct ChannelConfig {
    pub channel: Channel,
    pub output_mode: OutputMode,
    pub compare: u16,
    pub enable_interrupt: bool,
}

/// PWM setup: shared period plus a per-channel duty threshold.
#[derive(Copy, Clone, Debug)]
pub struct PwmConfig {
    pub channel: Channel,
    pub period: u16,
    pub duty: u16,
    pub output_mode: OutputMode,
}

/// A 16-bit general-purpose timer with three capture/compare channels.
///
/// Owns the register backend and the last configured counting mode, so
/// [`Timer::start`] can resume after a plain [`Timer::stop`].
#[derive(Debug)]
pub struct Timer<B> {
    regs: B,
    last_mode: Mode,
}

impl<B: TimerRegisters> Timer<B> {
    /// Wraps a register backend. The counting mode starts out as
    /// [`Mode::Stop`]; no register is touched until a configure or control
    /// call.
    #[inline]
    pub fn new(regs: B) -> Self {
        Self {
            regs,
            last_mode: Mode::Stop,
        }
    }

    #[inline]
    fn modify_ctl(&mut self, f: impl FnOnce(u16) -> u16) {
        let value = self.regs.read_ctl();
        self.regs.write_ctl(f(value));
    }

    #[inline]
    fn modify_cctl(&mut self, channel: Channel, f: impl FnOnce(u16) -> u16) {
        let value = self.regs.read_cctl(channel);
        self.regs.write_cctl(channel, f(value));
    }

    /// Reconfigures clock path, counting mode, interrupt enable and period.
    ///
    /// The counter is halted and cleared before the clock source or divider
    /// change, so no truncated clock edge reaches the counter. Writing the
    /// mode field in the last control step means a non-stop `config.mode`
    /// starts the timer right here, without a separate [`Timer::start`].
    pub fn apply_config(&mut self, config: &TimerConfig) {
        log::trace!("timer reconfigure: {:?}", config);
        // Halt before touching the clock path.
        self.modify_ctl(|w| ctl::with_mode(w, Mode::Stop));
        // Clear counter and prescaler.
        self.modify_ctl(|w| w | ctl::TACLR);
        // A stale pending flag would fire the moment interrupts are enabled.
        self.modify_ctl(|w| w & !ctl::TAIFG);
        // Clock source, divider and mode go in together.
        self.modify_ctl(|w| {
            let w = ctl::with_clock_source(w, config.clock_source);
            let w = ctl::with_divider(w, config.divider);
            ctl::with_mode(w, config.mode)
        });
        self.modify_ctl(|w| {
            if config.enable_interrupt {
                w | ctl::TAIE
            } else {
                w & !ctl::TAIE
            }
        });
        self.regs.write_ccr(Channel::C0, config.period);
        self.last_mode = config.mode;
    }

    /// Puts a channel into compare mode with the given output behavior.
    ///
    /// Capture-only fields are cleared before the output mode is written, so
    /// no transient capture-plus-output state is ever visible.
    pub fn configure_channel(&mut self, config: &ChannelConfig) {
        log::trace!("channel reconfigure: {:?}", config);
        let channel = config.channel;
        self.modify_cctl(channel, |w| w & !cctl::CAP);
        // Stale capture settings are meaningless in compare mode.
        self.modify_cctl(channel, |w| w & !cctl::CAPTURE_FIELDS);
        self.modify_cctl(channel, |w| cctl::with_output_mode(w, config.output_mode));
        self.modify_cctl(channel, |w| {
            if config.enable_interrupt {
                w | cctl::CCIE
            } else {
                w & !cctl::CCIE
            }
        });
        self.modify_cctl(channel, |w| w & !cctl::COV);
        self.modify_cctl(channel, |w| w & !cctl::CCIFG);
        self.regs.write_ccr(channel, config.compare);
    }

    /// Sets up a PWM waveform and starts counting in up mode immediately.
    ///
    /// The channel interrupt stays disabled; the compare match only drives
    /// the output pin.
    pub fn config_pwm(&mut self, config: &PwmConfig) {
        self.set_period(config.period);
        self.configure_channel(&ChannelConfig {
            channel: config.channel,
            output_mode: config.output_mode,
            compare: config.duty,
            enable_interrupt: false,
        });
        self.last_mode = Mode::Up;
        self.modify_ctl(|w| ctl::with_mode(w, Mode::Up));
    }

    /// Resumes counting in the last configured mode.
    #[inline]
    pub fn start(&mut self) {
        let mode = self.last_mode;
        self.modify_ctl(|w| ctl::with_mode(w, mode));
    }

    /// Starts counting in `mode`, overriding the last configured mode.
    #[inline]
    pub fn start_in_mode(&mut self, mode: Mode) {
        self.last_mode = mode;
        self.modify_ctl(|w| ctl::with_mode(w, mode));
    }

    /// Halts the counter. Only the mode field changes; a later
    /// [`Timer::start`] resumes the previous mode.
    #[inline]
    pub fn stop(&mut self) {
        self.modify_ctl(|w| ctl::with_mode(w, Mode::Stop));
    }

    /// Clears counter, prescaler and pending interrupt flag. A running timer
    /// keeps running, restarting from zero.
    #[inline]
    pub fn reset_counter(&mut self) {
        self.modify_ctl(|w| w | ctl::TACLR);
        self.modify_ctl(|w| w & !ctl::TAIFG);
    }

    /// Snapshot of the free-running counter. The hardware advances it
    /// independently, so consecutive reads may differ.
    #[inline]
    pub fn counter(&self) -> u16 {
        self.regs.read_counter()
    }

    /// Direct period write, without the halt/clear sequence of
    /// [`Timer::apply_config`].
    #[inline]
    pub fn set_period(&mut self, period: u16) {
        self.regs.write_ccr(Channel::C0, period);
    }

    /// Direct compare-threshold write for one channel.
    #[inline]
    pub fn set_duty(&mut self, channel: Channel, duty: u16) {
        self.regs.write_ccr(channel, duty);
    }

    /// Stored compare threshold of a channel.
    #[inline]
    pub fn capture_compare(&self, channel: Channel) -> u16 {
        self.regs.read_ccr(channel)
    }

    /// Changes only the output-mode field of a channel.
    #[inline]
    pub fn set_output_mode(&mut self, channel: Channel, mode: OutputMode) {
        self.modify_cctl(channel, |w| cctl::with_output_mode(w, mode));
    }

    /// Counting mode currently in the control register.
    #[inline]
    pub fn mode(&self) -> Mode {
        ctl::mode(self.regs.read_ctl())
    }

    /// Mode the next plain [`Timer::start`] will select.
    #[inline]
    pub fn last_mode(&self) -> Mode {
        self.last_mode
    }

    /// Releases the register backend.
    #[inline]
    pub fn release(self) -> B {
        self.regs
    }
}
