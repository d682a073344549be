//! Primitive LED control and pulse shapes.
//!
//! Nothing here is exported. Patterns in `signal` are the only users, apart from
//! `off()` which `StatusLed` passes through for the legacy call sites.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

pub(crate) const SHORT_MS: u32 = 100; // on time, and off time after
pub(crate) const LONG_MS: u32 = 300;

/// Which pin level lights the LED.
///
/// Depending on board wiring, on may be set_high or set_low. The stm32f401 black pill
/// (and the signing device itself) light the LED with the pin low, so that is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

// Pin errors are Infallible, this turns the Result into () without an unwrap.
fn done(r: Result<(), Infallible>) {
    r.unwrap_or_else(|e| match e {})
}

pub(crate) struct Led<P> {
    pin: P,
    polarity: Polarity,
}

impl<P> Led<P>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    pub(crate) fn new(pin: P, polarity: Polarity) -> Self {
        Led { pin, polarity }
    }

    pub(crate) fn on(&mut self) {
        match self.polarity {
            Polarity::ActiveLow => done(self.pin.set_low()),
            Polarity::ActiveHigh => done(self.pin.set_high()),
        }
    }

    pub(crate) fn off(&mut self) {
        match self.polarity {
            Polarity::ActiveLow => done(self.pin.set_high()),
            Polarity::ActiveHigh => done(self.pin.set_low()),
        }
    }

    /// Invert whatever level the pin is at now. Polarity does not matter.
    pub(crate) fn toggle(&mut self) {
        done(self.pin.toggle())
    }

    // Note these use delay so DO NOT USE from an interrupt while a pattern is running.

    /// Force off, light for `time` ms, then off for the same time.
    ///
    /// Starting from off means pulses can be chained without caring what came before.
    pub(crate) fn pulse(&mut self, time: u32, delay: &mut impl DelayNs) {
        self.off();
        self.on();
        delay.delay_ms(time);
        self.off();
        delay.delay_ms(time);
    }

    /// 200 ms total.
    pub(crate) fn short(&mut self, delay: &mut impl DelayNs) {
        self.pulse(SHORT_MS, delay)
    }

    /// 600 ms total.
    pub(crate) fn long(&mut self, delay: &mut impl DelayNs) {
        self.pulse(LONG_MS, delay)
    }

    pub(crate) fn release(self) -> P {
        self.pin
    }
}
