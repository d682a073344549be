//! Recording pin and delay for host tests.
//!
//! Both write into one shared log so the order of level writes and delays can be checked.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::led::Polarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    Delay(u32), // ms
}

#[derive(Clone)]
pub struct Log {
    events: Rc<RefCell<Vec<Event>>>,
    high: Rc<Cell<bool>>,
    changes: Rc<Cell<usize>>,
}

impl Log {
    /// Pin starts low.
    pub fn new() -> Self {
        Log::with_level(false)
    }

    pub fn with_level(high: bool) -> Self {
        Log {
            events: Rc::new(RefCell::new(Vec::new())),
            high: Rc::new(Cell::new(high)),
            changes: Rc::new(Cell::new(0)),
        }
    }

    pub fn pin(&self) -> Pin {
        Pin { log: self.clone() }
    }

    pub fn delay(&self) -> Delay {
        Delay { log: self.clone() }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Forget recorded events, keeping the current pin level.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        self.changes.set(0);
    }

    pub fn total_delay_ms(&self) -> u32 {
        self.events
            .borrow()
            .iter()
            .map(|e| match e {
                Event::Delay(ms) => *ms,
                _ => 0,
            })
            .sum()
    }

    /// Writes that actually changed the pin level.
    pub fn level_changes(&self) -> usize {
        self.changes.get()
    }

    pub fn lit(&self, polarity: Polarity) -> bool {
        match polarity {
            Polarity::ActiveLow => !self.high.get(),
            Polarity::ActiveHigh => self.high.get(),
        }
    }

    fn set(&self, high: bool) {
        if self.high.get() != high {
            self.changes.set(self.changes.get() + 1);
        }
        self.high.set(high);
        self.events
            .borrow_mut()
            .push(if high { Event::High } else { Event::Low });
    }

    fn wait(&self, ms: u32) {
        self.events.borrow_mut().push(Event::Delay(ms));
    }
}

pub struct Pin {
    log: Log,
}

impl ErrorType for Pin {
    type Error = Infallible;
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.set(true);
        Ok(())
    }
}

impl StatefulOutputPin for Pin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.log.high.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.log.high.get())
    }
}

pub struct Delay {
    log: Log,
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.wait(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.log.wait(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.wait(ms);
    }
}
