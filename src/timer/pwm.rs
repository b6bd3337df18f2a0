use super::timer::{PwmConfig, Timer};
use crate::backend::TimerRegisters;
use crate::regs::{Channel, OutputMode};
use embedded_hal::PwmPin;

/// One capture/compare channel driven as a PWM output.
///
/// Borrows the timer; the shared period register stays under the timer's
/// control while the channel only owns its duty threshold.
#[derive(Debug)]
pub struct Pwm<'a, B> {
    timer: &'a mut Timer<B>,
    channel: Channel,
    output_mode: OutputMode,
}

impl<'a, B: TimerRegisters> Pwm<'a, B> {
    /// Configures the channel for PWM and starts the timer in up mode.
    #[inline]
    pub fn new(timer: &'a mut Timer<B>, config: PwmConfig) -> Self {
        timer.config_pwm(&config);
        Self {
            timer,
            channel: config.channel,
            output_mode: config.output_mode,
        }
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }
}

impl PwmConfig {
    #[inline]
    pub fn make<B: TimerRegisters>(self, timer: &mut Timer<B>) -> Pwm<'_, B> {
        Pwm::new(timer, self)
    }
}

impl<'a, B: TimerRegisters> PwmPin for Pwm<'a, B> {
    type Duty = u16;

    /// Parks the output on the plain output bit, which is left low.
    #[inline]
    fn disable(&mut self) {
        self.timer.set_output_mode(self.channel, OutputMode::OutBit);
    }

    /// Restores the configured output mode.
    #[inline]
    fn enable(&mut self) {
        self.timer.set_output_mode(self.channel, self.output_mode);
    }

    #[inline]
    fn get_duty(&self) -> u16 {
        self.timer.capture_compare(self.channel)
    }

    /// The shared period threshold caps the duty.
    #[inline]
    fn get_max_duty(&self) -> u16 {
        self.timer.capture_compare(Channel::C0)
    }

    #[inline]
    fn set_duty(&mut self, duty: u16) {
        self.timer.set_duty(self.channel, duty);
    }
}

#[cfg(test)]
mod tests {
    use super::super::timer::{PwmConfig, Timer};
    use super::Pwm;
    use crate::mock::Registers;
    use crate::regs::{cctl, Channel, Mode, OutputMode};
    use embedded_hal::PwmPin;

    fn pwm_config() -> PwmConfig {
        PwmConfig {
            channel: Channel::C2,
            period: 2000,
            duty: 600,
            output_mode: OutputMode::ResetSet,
        }
    }

    #[test]
    fn duty_and_max_duty() {
        let mut timer = Timer::new(Registers::new());
        let mut pwm = pwm_config().make(&mut timer);

        assert_eq!(pwm.get_max_duty(), 2000);
        assert_eq!(pwm.get_duty(), 600);
        pwm.set_duty(1500);
        assert_eq!(pwm.get_duty(), 1500);
        assert_eq!(timer.mode(), Mode::Up);
    }

    #[test]
    fn disable_parks_output_low() {
        let mut timer = Timer::new(Registers::new());
        let mut pwm = Pwm::new(&mut timer, pwm_config());
        pwm.disable();
        drop(pwm);

        let regs = timer.release();
        assert_eq!(cctl::output_mode(regs.cctl[2]), OutputMode::OutBit);
        assert_eq!(regs.cctl[2] & cctl::OUT, 0);
    }

    #[test]
    fn enable_restores_output_mode() {
        let mut timer = Timer::new(Registers::new());
        let mut pwm = Pwm::new(&mut timer, pwm_config());
        pwm.disable();
        pwm.enable();
        drop(pwm);

        assert_eq!(
            cctl::output_mode(timer.release().cctl[2]),
            OutputMode::ResetSet
        );
    }
}
