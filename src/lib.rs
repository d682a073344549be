//! Status LED patterns for a security device with a single LED.
//!
//! Device events (boot, sign request, pairing code, warning, abort) are shown as
//! timed blinks built from a short and a long pulse. Everything runs blocking and
//! to completion on the calling thread, using an embedded-hal output pin and delay.
//!
//! Only the named patterns in [`signal`] are public. Direct on/toggle control of the
//! LED stays inside the crate so that no caller can drive the LED arbitrarily while a
//! pairing code is being shown.

#![cfg_attr(not(test), no_std)]

mod led;  // on, off, toggle and the two pulse shapes. crate private
pub mod signal;

#[cfg(feature = "stm32f401")]
pub mod setup_stm32f4xx;

#[cfg(test)]
mod mock;

pub use led::Polarity;
pub use signal::{Config, Error, Signal, StatusLed, MAX_CODE_BLINKS};
