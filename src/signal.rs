//! Named status LED patterns.
//!
//! Each pattern is a fixed sequence of short (200 ms) and long (600 ms) pulses and
//! always leaves the LED off. Only [`StatusLed::code`] takes a parameter and only it
//! can fail.
//!
//! | pattern    | sequence                                          | ms           |
//! |------------|---------------------------------------------------|--------------|
//! | `abort`    | off, wait 300, 6 x short                          | 1500         |
//! | `startup`  | short, long, short (`success` is the same)        | 1000         |
//! | `u2f`      | 3 x (short, long, wait 200)                       | 3000         |
//! | `password` | 2 x short                                         | 400          |
//! | `sign`     | short                                             | 200          |
//! | `warn`     | 3 x short                                         | 600          |
//! | `code(n)`  | off, wait 500, n x (toggle, wait 300, toggle, wait 300), wait 500 | 1000 + 600 n |

use core::convert::Infallible;
use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::led::{Led, Polarity, LONG_MS, SHORT_MS};

/// Largest pairing code that is still easy to count by eye.
pub const MAX_CODE_BLINKS: u8 = 4;

const ABORT_LEAD_MS: u32 = 300;
const U2F_GAP_MS: u32 = 200;
const CODE_FRAME_MS: u32 = 500; // wait before and after the blink train
const CODE_HALF_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pairing code longer than the configured maximum. Nothing was blinked.
    OutOfRange { requested: u8, max: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { requested, max } => {
                write!(f, "pairing code {} out of range (max {})", requested, max)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub polarity: Polarity,
    pub max_code_blinks: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            polarity: Polarity::default(),
            max_code_blinks: MAX_CODE_BLINKS,
        }
    }
}

/// A device event that has a blink pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A long touch was aborted.
    Abort,
    /// Device booted into the firmware.
    Startup,
    /// LED test from device settings.
    Success,
    /// U2F authenticate, hijack or wink.
    U2f,
    /// Request to set the device password or open the hidden wallet.
    Password,
    /// Request to sign a transaction.
    Sign,
    /// Prefix asking the user to double check before lock, erase or reset.
    Warn,
    /// Pairing code for 2FA mobile pairing.
    Code(u8),
}

impl Signal {
    /// Total time the pattern blocks for, in ms.
    pub const fn duration_ms(&self) -> u32 {
        let short = 2 * SHORT_MS;
        let long = 2 * LONG_MS;
        match self {
            Signal::Abort => ABORT_LEAD_MS + 6 * short,
            Signal::Startup | Signal::Success => short + long + short,
            Signal::U2f => 3 * (short + long + U2F_GAP_MS),
            Signal::Password => 2 * short,
            Signal::Sign => short,
            Signal::Warn => 3 * short,
            Signal::Code(n) => 2 * CODE_FRAME_MS + (*n as u32) * 2 * CODE_HALF_MS,
        }
    }
}

/// The status LED with its delay.
///
/// The pin and delay are owned for the life of the value, so this is the only writer
/// of the LED pin. Patterns block until done and must not be started from an
/// interrupt while another is running.
pub struct StatusLed<P, D> {
    led: Led<P>,
    delay: D,
    max_code_blinks: u8,
}

impl<P, D> StatusLed<P, D>
where
    P: StatefulOutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Active low LED, default maximum pairing code. The LED is turned off.
    pub fn new(pin: P, delay: D) -> Self {
        Self::with_config(pin, delay, Config::default())
    }

    pub fn with_config(pin: P, delay: D, config: Config) -> Self {
        let mut led = Led::new(pin, config.polarity);
        led.off();
        StatusLed {
            led,
            delay,
            max_code_blinks: config.max_code_blinks,
        }
    }

    pub fn max_code_blinks(&self) -> u8 {
        self.max_code_blinks
    }

    /// Turn the LED off, leaving it to the caller to give the pin back.
    pub fn release(mut self) -> (P, D) {
        self.led.off();
        (self.led.release(), self.delay)
    }

    /// Turn the LED off.
    ///
    /// Kept for the touch handler and the bootloader, which switch the LED off directly.
    /// There is deliberately no public `on`.
    pub fn off(&mut self) {
        self.led.off();
    }

    /// Run the pattern for `signal`. Only `Signal::Code` can fail.
    pub fn show(&mut self, signal: Signal) -> Result<(), Error> {
        match signal {
            Signal::Abort => self.abort(),
            Signal::Startup => self.startup(),
            Signal::Success => self.success(),
            Signal::U2f => self.u2f(),
            Signal::Password => self.password(),
            Signal::Sign => self.sign(),
            Signal::Warn => self.warn(),
            Signal::Code(n) => return self.code(n),
        }
        Ok(())
    }

    /// A long touch was aborted.
    pub fn abort(&mut self) {
        self.led.off();
        self.delay.delay_ms(ABORT_LEAD_MS);
        for _ in 0..6 {
            self.led.short(&mut self.delay);
        }
    }

    /// Device booted into the firmware.
    pub fn startup(&mut self) {
        self.led.short(&mut self.delay);
        self.led.long(&mut self.delay);
        self.led.short(&mut self.delay);
    }

    pub fn success(&mut self) {
        self.startup();
    }

    pub fn u2f(&mut self) {
        for _ in 0..3 {
            self.led.short(&mut self.delay);
            self.led.long(&mut self.delay);
            self.delay.delay_ms(U2F_GAP_MS);
        }
    }

    pub fn password(&mut self) {
        self.led.short(&mut self.delay);
        self.led.short(&mut self.delay);
    }

    pub fn sign(&mut self) {
        self.led.short(&mut self.delay);
    }

    pub fn warn(&mut self) {
        for _ in 0..3 {
            self.led.short(&mut self.delay);
        }
    }

    /// Blink `count` times so a person can read a pairing code off the LED.
    /// Only for 2FA mobile pairing.
    ///
    /// The LED is forced off first, then each blink is two toggles, so it ends off.
    /// A count above the maximum is rejected before the LED is touched.
    pub fn code(&mut self, count: u8) -> Result<(), Error> {
        if count > self.max_code_blinks {
            return Err(Error::OutOfRange {
                requested: count,
                max: self.max_code_blinks,
            });
        }

        self.led.off();
        self.delay.delay_ms(CODE_FRAME_MS);
        for _ in 0..count {
            self.led.toggle();
            self.delay.delay_ms(CODE_HALF_MS);
            self.led.toggle();
            self.delay.delay_ms(CODE_HALF_MS);
        }
        self.delay.delay_ms(CODE_FRAME_MS);
        Ok(())
    }
}
