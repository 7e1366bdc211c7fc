// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Infrared reflectance line sensors.
//!
//! A dark line reflects less IR than the floor, so a raw sample below [`LINE_THRESHOLD`] means the
//! sensor is over the line. There is no filtering or calibration: every call is a fresh,
//! independent conversion, and the two sensors are never sampled together.

use crate::hw::{AnalogIn, PinMap};

/// Raw readings strictly below this are "on the line".
pub const LINE_THRESHOLD: u16 = 500;

/// Which of the two line sensors to sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorChannel {
    Left,
    Right,
}

/// One sample of both sensors.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineState {
    pub left_on_line: bool,
    pub right_on_line: bool,
}

impl LineState {
    #[inline]
    pub const fn new(left_on_line: bool, right_on_line: bool) -> Self {
        Self {
            left_on_line,
            right_on_line,
        }
    }

    /// Neither sensor sees the line.
    #[inline]
    pub fn is_lost(&self) -> bool {
        !self.left_on_line && !self.right_on_line
    }
}

/// Left/right line sensor pair on two analog inputs.
pub struct LineSensors<IN> {
    adc: IN,
    pins: PinMap,
}

impl<IN: AnalogIn> LineSensors<IN> {
    pub fn new(adc: IN, pins: PinMap) -> Self {
        Self { adc, pins }
    }

    #[inline]
    pub fn pins(&self) -> &PinMap {
        &self.pins
    }

    pub fn free(self) -> IN {
        self.adc
    }

    /// Raw 10-bit sample of `channel`.
    pub fn read_raw(&mut self, channel: SensorChannel) -> u16 {
        let raw = self.adc.read_analog(self.pins.sensor_pin(channel));
        trace!("line sensor {}: {}", channel, raw);
        raw
    }

    /// Whether `channel` currently sits over the line.
    #[inline]
    pub fn is_on_line(&mut self, channel: SensorChannel) -> bool {
        self.read_raw(channel) < LINE_THRESHOLD
    }

    /// Sample left, then right.
    pub fn read_state(&mut self) -> LineState {
        let left_on_line = self.is_on_line(SensorChannel::Left);
        let right_on_line = self.is_on_line(SensorChannel::Right);
        LineState::new(left_on_line, right_on_line)
    }
}
