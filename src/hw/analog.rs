// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin-addressed analog I/O.
//!
//! The BitCar wiring is described as plain pin numbers (see [`PinMap`](crate::hw::PinMap)), so the
//! hardware boundary is a pair of per-pin traits rather than one typed handle per pin. Board code
//! implements them on top of its timers and ADC; tests implement them on simulated hardware.

/// Full-scale value of a 10-bit analog sample.
pub const ADC_MAX: u16 = 1023;

/// Write a PWM duty cycle to an analog output pin.
pub trait AnalogOut {
    /// Drive `pin` at duty `value`, on the `0..=PinMap::pwm_max` scale.
    fn write_analog(&mut self, pin: u8, value: u16);
}

/// Sample an analog input pin.
pub trait AnalogIn {
    /// Blocking single conversion, `0..=ADC_MAX`.
    fn read_analog(&mut self, pin: u8) -> u16;
}

impl<T: AnalogOut + ?Sized> AnalogOut for &mut T {
    #[inline]
    fn write_analog(&mut self, pin: u8, value: u16) {
        (**self).write_analog(pin, value)
    }
}

impl<T: AnalogIn + ?Sized> AnalogIn for &mut T {
    #[inline]
    fn read_analog(&mut self, pin: u8) -> u16 {
        (**self).read_analog(pin)
    }
}
