// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! BitCar line follower on the STM32F777 motor board.
//!
//! Boots, rights the car, then follows the line forever at a fixed tick.

#![no_main]
#![no_std]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use embedded_hal::delay::DelayNs;
use panic_halt as _;

#[cfg(feature = "defmt")]
use defmt_rtt as _;

use hal::{
    pac,
    prelude::*,
    timer::{Channel1, Channel2, Channel3, Channel4},
};
use stm32f7xx_hal as hal;

use bitcar::control::LineFollower;
use bitcar::drivers::{LineSensors, MotorDriver};
use bitcar::hw::{Adc, PinMap, PwmBank};

/// Motors on TIM4 CH1..CH4 (PD12..PD15), sensors on ADC1_IN14 / ADC1_IN15 (PC4 / PC5).
const BOARD_PINS: PinMap = PinMap {
    left_forward: 1,
    left_backward: 2,
    right_forward: 3,
    right_backward: 4,
    left_sensor: 14,
    right_sensor: 15,
    pwm_max: 1023,
};

const FOLLOW_SPEED: i32 = 50;
const STAND_UP_SPEED: i32 = 100;
const STAND_UP_CHARGE_MS: u32 = 250;
const TICK_MS: u32 = 20;

/// SysTick delay behind the embedded-hal 1.0 delay trait.
struct SysTickDelay(Delay);

impl DelayNs for SysTickDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let gpioc = dp.GPIOC.split();
    let gpiod = dp.GPIOD.split();

    // Line sensors
    let _left_sensor = gpioc.pc4.into_analog();
    let _right_sensor = gpioc.pc5.into_analog();
    let adc = Adc::adc1(dp.ADC1);

    // Motor PWM
    let channels = (
        Channel1::new(gpiod.pd12),
        Channel2::new(gpiod.pd13),
        Channel3::new(gpiod.pd14),
        Channel4::new(gpiod.pd15),
    );
    let (ch1, ch2, ch3, ch4) = dp.TIM4.pwm_hz(channels, 20.kHz(), &clocks).split();
    let pwm = PwmBank::new(ch1, ch2, ch3, ch4, BOARD_PINS.pwm_max);

    let mut delay = SysTickDelay(Delay::new(cp.SYST, clocks.sysclk().raw()));

    let mut car = LineFollower::new(
        MotorDriver::new(pwm, BOARD_PINS),
        LineSensors::new(adc, BOARD_PINS),
    );

    #[cfg(feature = "defmt")]
    defmt::info!("BitCar up, pins: {}", BOARD_PINS);

    car.stop();
    car.stand_up(&mut delay, STAND_UP_SPEED, STAND_UP_CHARGE_MS);

    #[cfg(feature = "defmt")]
    defmt::info!("stand-up done, following at {}%", FOLLOW_SPEED);

    let mut last = None;
    loop {
        let command = car.tick(FOLLOW_SPEED);
        if command.is_some() && command != last {
            #[cfg(feature = "defmt")]
            defmt::info!("command: {}", command);
            last = command;
        }
        delay.delay_ms(TICK_MS);
    }
}
