//! Show every status LED pattern on the onboard LED of a stm32f401 black pill, in a loop.
//! Progress is reported over semihosting, so run under a debugger (probe-rs, openocd).
//! A pairing code one past the maximum is also attempted, to show it is rejected without blinking.

#![deny(unsafe_code)]
#![no_std]
#![no_main]

/////////////////////

//  run with
// cargo  run --no-default-features --target thumbv7em-none-eabihf --features stm32f401 --bin patterns

const PAUSE: u32 = 2000;    // used as ms, dark time between patterns

////////////////////

#[cfg(debug_assertions)]
use panic_semihosting as _;

#[cfg(not(debug_assertions))]
use panic_halt as _;

use cortex_m_semihosting::hprintln;
use cortex_m_rt::entry;

use embedded_hal::delay::DelayNs;

/////////////////////  local libs  //////////////////////////////////

use status_led::setup_stm32f4xx::{setup_from_dp, Peripherals};
use status_led::{Signal, StatusLed, MAX_CODE_BLINKS};

const PATTERNS: [Signal; 8] = [
    Signal::Sign,
    Signal::Password,
    Signal::Warn,
    Signal::U2f,
    Signal::Abort,
    Signal::Success,
    Signal::Code(2),
    Signal::Code(MAX_CODE_BLINKS),
];

//////////////////////////  main  /////////////////////////////////////

#[entry]
fn main() -> ! {

    let dp = Peripherals::take().unwrap();

    let (pin, delay1, mut delay2) = setup_from_dp(dp);

    let mut led = StatusLed::new(pin, delay1);

    hprintln!("startup, {} ms", Signal::Startup.duration_ms());
    led.startup();
    delay2.delay_ms(PAUSE);

    loop {
      for signal in PATTERNS {
         hprintln!("{:?}, {} ms", signal, signal.duration_ms());
         match led.show(signal) {
               Ok(())  => {},
               Err(e)  => {hprintln!("{}", e)},
         };
         delay2.delay_ms(PAUSE);
      };

      match led.code(MAX_CODE_BLINKS + 1) {
            Ok(())  => {hprintln!("code {} accepted. It should not be!", MAX_CODE_BLINKS + 1)},
            Err(e)  => {hprintln!("rejected as expected: {}", e)},
      };
      delay2.delay_ms(PAUSE);
    }
}
