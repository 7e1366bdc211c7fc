// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated BitCar hardware for unit tests.
//!
//! `SimBoard` handles are cheap clones of one shared board, so the motor driver and the sensor
//! reader can both hold one while the test keeps another to inspect the result.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::hw::{AnalogIn, AnalogOut};

/// Everything that reached the simulated hardware, in order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Write(u8, u16),
    Read(u8, u16),
    DelayMs(u32),
}

#[derive(Default)]
struct State {
    events: Vec<Event>,
    duties: BTreeMap<u8, u16>,
    scripts: BTreeMap<u8, VecDeque<u16>>,
}

#[derive(Clone, Default)]
pub struct SimBoard {
    state: Rc<RefCell<State>>,
}

impl SimBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue readings for `pin`. The last value keeps being returned once the queue drains.
    pub fn script(&self, pin: u8, values: &[u16]) {
        self.state
            .borrow_mut()
            .scripts
            .entry(pin)
            .or_default()
            .extend(values.iter().copied());
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn writes(&self) -> Vec<(u8, u16)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Write(pin, value) => Some((pin, value)),
                _ => None,
            })
            .collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::DelayMs(ms) => Some(ms),
                _ => None,
            })
            .collect()
    }

    /// Last duty written to `pin`, 0 if never written.
    pub fn duty(&self, pin: u8) -> u16 {
        self.state.borrow().duties.get(&pin).copied().unwrap_or(0)
    }

    pub fn duties(&self) -> BTreeMap<u8, u16> {
        self.state.borrow().duties.clone()
    }

    fn log(&self, event: Event) {
        self.state.borrow_mut().events.push(event);
    }
}

impl AnalogOut for SimBoard {
    fn write_analog(&mut self, pin: u8, value: u16) {
        self.state.borrow_mut().duties.insert(pin, value);
        self.log(Event::Write(pin, value));
    }
}

impl AnalogIn for SimBoard {
    fn read_analog(&mut self, pin: u8) -> u16 {
        let value = {
            let mut state = self.state.borrow_mut();
            let queue = state
                .scripts
                .get_mut(&pin)
                .unwrap_or_else(|| panic!("no readings scripted for pin {pin}"));
            if queue.len() > 1 {
                queue.pop_front().unwrap()
            } else {
                *queue.front().expect("empty script")
            }
        };
        self.log(Event::Read(pin, value));
        value
    }
}

/// Delay that returns immediately and records the requested time on the board's event log.
pub struct SimDelay {
    board: SimBoard,
}

impl SimDelay {
    pub fn new(board: &SimBoard) -> Self {
        Self {
            board: board.clone(),
        }
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.board.log(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.board.log(Event::DelayMs(ms));
    }
}
