// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADC1 line-sensor sampling on STM32F7 using direct PAC register access.
//!
//! Conversions are 10-bit so raw values share the `0..=1023` scale the line threshold is defined
//! on.
//!
//! Example:
//! ```ignore
//! let mut adc = Adc::adc1(dp.ADC1);
//! let value = adc.read_analog(14);
//! ```

use stm32f7xx_hal::pac;

use crate::hw::AnalogIn;

/// ADC1 wrapper with blocking single-channel reads.
pub struct Adc {
    adc: pac::ADC1,
}

impl Adc {
    /// Enable and configure ADC1.
    pub fn adc1(adc1: pac::ADC1) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        let common = unsafe { &*pac::ADC_COMMON::ptr() };
        // ADC prescaler: PCLK2 / 4
        common.ccr.modify(|_, w| w.adcpre().div4());

        // Power off to configure
        adc1.cr2.modify(|_, w| w.adon().clear_bit());

        // 10-bit, right-aligned, software trigger
        adc1.cr1.modify(|_, w| w.res().bits(0b01));
        adc1.cr2.modify(|_, w| {
            w.cont().clear_bit();
            w.align().right();
            w.exten().disabled();
            w
        });

        adc1.cr2.modify(|_, w| w.adon().set_bit());

        Self { adc: adc1 }
    }

    #[inline]
    pub fn free(self) -> pac::ADC1 {
        self.adc
    }

    fn convert(&self, channel: u8) -> u16 {
        let adc = &self.adc;

        // Long sample time on the sensor inputs, which sit on channels 10..=18.
        if (10..=18).contains(&channel) {
            adc.smpr1.modify(|_, w| match channel {
                10 => w.smp10().bits(0b111),
                11 => w.smp11().bits(0b111),
                12 => w.smp12().bits(0b111),
                13 => w.smp13().bits(0b111),
                14 => w.smp14().bits(0b111),
                15 => w.smp15().bits(0b111),
                16 => w.smp16().bits(0b111),
                17 => w.smp17().bits(0b111),
                _ => w.smp18().bits(0b111),
            });
        }

        // Sequence length = 1 conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));
        adc.sqr3
            .modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

        adc.cr2.modify(|_, w| w.swstart().set_bit());
        while adc.sr.read().eoc().bit_is_clear() {}

        adc.dr.read().data().bits() as u16
    }
}

impl AnalogIn for Adc {
    #[inline]
    fn read_analog(&mut self, pin: u8) -> u16 {
        self.convert(pin)
    }
}
