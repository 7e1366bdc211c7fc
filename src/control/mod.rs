// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control
//!
//! - [`line_follower`] - greedy two-sensor line follower, one decision per tick.

pub mod line_follower;

pub use line_follower::LineFollower;
