// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # BitCar Firmware
//!
//! Hardware abstraction and line-following control for the BitCar, a two-motor differential-drive
//! robot with two IR line sensors.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Pin-addressed analog I/O traits, BitCar wiring, STM32F7 ADC/PWM backends |
//! | [`drivers`] | Motor driver (incl. self-righting) and line sensors |
//! | [`control`] | Reactive line follower |
//!
//! ## Getting Started
//!
//! Run the unit tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board,defmt --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod control;
pub mod drivers;
pub mod hw;

#[cfg(test)]
mod sim;
