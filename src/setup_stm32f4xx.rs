//! Board setup for the stm32f401 "black pill". The onboard LED is on PC13, wired active low.

pub use stm32f4xx_hal::pac::{Peripherals};

use stm32f4xx_hal::{
      pac::{TIM2, TIM5 },
      timer::{Delay as timDelay, TimerExt},
      rcc::{RccExt},
      gpio::{Output, PushPull, GpioExt, PinState,
             gpioc::{PC13 as LEDPIN}
      },
};

use embedded_hal::delay::DelayNs;

const TIM_FREQ: u32 =  1000000;
pub type Delay1Type = timDelay<TIM5, TIM_FREQ>;  // owned by StatusLed
pub type Delay2Type = timDelay<TIM2, TIM_FREQ>;  // for the caller

pub type LedType = LEDPIN<Output<PushPull>>;

/////////////////////////////   setup  //////////////////////////////////

pub fn setup_from_dp(dp: Peripherals) -> (LedType, Delay1Type, Delay2Type) {

   let rcc = dp.RCC.constrain();
   let clocks = rcc.cfgr.freeze();

   let gpioc   = dp.GPIOC.split();

   // off is high on this board. Start high so the LED never flashes during setup.
   let led = gpioc.pc13.into_push_pull_output_in_state(PinState::High);

   let delay1 = dp.TIM5.delay::<TIM_FREQ>(&clocks);
   let mut delay2 = dp.TIM2.delay::<TIM_FREQ>(&clocks);

   delay2.delay_ms(1000);   // let the board settle before the first pattern

   (led, delay1, delay2)
}
