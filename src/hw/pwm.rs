// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Four-channel PWM bank driving the motor inputs.
//!
//! Maps pin ids `1..=4` onto the four channels of one timer (TIM4 CH1..CH4 on the STM32F777
//! board) and rescales duty values from the BitCar's `0..=full_scale` range onto the timer's own
//! duty resolution.

use stm32f7xx_hal::prelude::*;

use crate::hw::AnalogOut;

/// `AnalogOut` over four hardware PWM channels.
pub struct PwmBank<Ch1, Ch2, Ch3, Ch4> {
    ch1: Ch1,
    ch2: Ch2,
    ch3: Ch3,
    ch4: Ch4,
    full_scale: u16,
}

impl<Ch1, Ch2, Ch3, Ch4> PwmBank<Ch1, Ch2, Ch3, Ch4>
where
    Ch1: _embedded_hal_PwmPin<Duty = u16>,
    Ch2: _embedded_hal_PwmPin<Duty = u16>,
    Ch3: _embedded_hal_PwmPin<Duty = u16>,
    Ch4: _embedded_hal_PwmPin<Duty = u16>,
{
    /// Take ownership of the channels, start them at zero duty and enable the outputs.
    ///
    /// `full_scale` is the input value that maps to 100 % duty (`PinMap::pwm_max`).
    pub fn new(mut ch1: Ch1, mut ch2: Ch2, mut ch3: Ch3, mut ch4: Ch4, full_scale: u16) -> Self {
        ch1.set_duty(0);
        ch2.set_duty(0);
        ch3.set_duty(0);
        ch4.set_duty(0);
        ch1.enable();
        ch2.enable();
        ch3.enable();
        ch4.enable();

        Self {
            ch1,
            ch2,
            ch3,
            ch4,
            full_scale: full_scale.max(1),
        }
    }

    pub fn free(self) -> (Ch1, Ch2, Ch3, Ch4) {
        (self.ch1, self.ch2, self.ch3, self.ch4)
    }

    #[inline]
    fn scale(&self, value: u16, max_duty: u16) -> u16 {
        let value = value.min(self.full_scale) as u32;
        (value * max_duty as u32 / self.full_scale as u32) as u16
    }
}

impl<Ch1, Ch2, Ch3, Ch4> AnalogOut for PwmBank<Ch1, Ch2, Ch3, Ch4>
where
    Ch1: _embedded_hal_PwmPin<Duty = u16>,
    Ch2: _embedded_hal_PwmPin<Duty = u16>,
    Ch3: _embedded_hal_PwmPin<Duty = u16>,
    Ch4: _embedded_hal_PwmPin<Duty = u16>,
{
    fn write_analog(&mut self, pin: u8, value: u16) {
        match pin {
            1 => {
                let duty = self.scale(value, self.ch1.get_max_duty());
                self.ch1.set_duty(duty);
            }
            2 => {
                let duty = self.scale(value, self.ch2.get_max_duty());
                self.ch2.set_duty(duty);
            }
            3 => {
                let duty = self.scale(value, self.ch3.get_max_duty());
                self.ch3.set_duty(duty);
            }
            4 => {
                let duty = self.scale(value, self.ch4.get_max_duty());
                self.ch4.set_duty(duty);
            }
            _ => warn!("no PWM channel on pin {}", pin),
        }
    }
}
