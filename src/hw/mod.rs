// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! - [`analog`] - pin-addressed `AnalogOut` / `AnalogIn` traits every driver is written against.
//! - [`pins`] - the fixed BitCar wiring.
//! - `adc`, `pwm` - STM32F7 implementations of the analog traits (feature `board`).

pub mod analog;
pub mod pins;

#[cfg(feature = "board")]
pub mod adc;
#[cfg(feature = "board")]
pub mod pwm;

pub use analog::{AnalogIn, AnalogOut, ADC_MAX};
pub use pins::PinMap;

#[cfg(feature = "board")]
pub use adc::Adc;
#[cfg(feature = "board")]
pub use pwm::PwmBank;
