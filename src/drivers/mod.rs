// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device Drivers
//!
//! BitCar peripherals built on the pin-addressed analog traits in `hw`.
//!
//! - [`motor_driver`] – forward/backward PWM pair per side, plus the self-righting maneuver
//! - [`line_sensor`] – two thresholded IR reflectance sensors

pub mod line_sensor;
pub mod motor_driver;

pub use line_sensor::{LineSensors, LineState, SensorChannel, LINE_THRESHOLD};
pub use motor_driver::{MotorCommand, MotorDriver, SPEED_FULL_SCALE, STAND_UP_REVERSE_MS};
