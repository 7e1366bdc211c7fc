// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin bindings for the BitCar.

use crate::drivers::SensorChannel;

/// Fixed wiring of the four motor pins and two line-sensor pins.
///
/// Construct once at startup and hand copies to the drivers; nothing mutates it afterwards.
///
/// ```rust
/// use bitcar::hw::PinMap;
///
/// let pins = PinMap::BITCAR;
/// assert_eq!(pins.left_forward, 14);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub left_forward: u8,
    pub left_backward: u8,
    pub right_forward: u8,
    pub right_backward: u8,

    pub left_sensor: u8,
    pub right_sensor: u8,

    /// Duty value written for 100 % speed.
    pub pwm_max: u16,
}

impl PinMap {
    /// Stock BitCar on the micro:bit edge connector.
    pub const BITCAR: PinMap = PinMap {
        left_backward: 13,
        left_forward: 14,
        right_forward: 15,
        right_backward: 16,
        left_sensor: 1,
        right_sensor: 2,
        pwm_max: 1023,
    };

    /// Analog input pin wired to `channel`.
    #[inline]
    pub fn sensor_pin(&self, channel: SensorChannel) -> u8 {
        match channel {
            SensorChannel::Left => self.left_sensor,
            SensorChannel::Right => self.right_sensor,
        }
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::BITCAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stock_wiring() {
        assert_eq!(PinMap::default(), PinMap::BITCAR);
    }

    #[test]
    fn sensor_pins_resolve_by_channel() {
        let pins = PinMap::BITCAR;
        assert_eq!(pins.sensor_pin(SensorChannel::Left), 1);
        assert_eq!(pins.sensor_pin(SensorChannel::Right), 2);
    }
}
