// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Reactive line follower.
//!
//! Each [`tick`](LineFollower::tick) samples the two line sensors and issues one differential
//! command: straight while both sensors see the line, otherwise a pivot that cuts power to the
//! side still over the line so the car swings back onto it. The follower keeps no state between
//! ticks and owns no timing; call it from a fixed-period loop.
//!
//! ```rust,ignore
//! let mut follower = LineFollower::new(motors, sensors);
//! loop {
//!     follower.tick(50);
//!     delay.delay_ms(20);
//! }
//! ```
//!
//! Known quirks of the decision sequence, kept on purpose:
//! - every sensor check is its own conversion, so one tick samples a sensor up to four times
//!   and the branches may see different readings;
//! - after a pivot both sensors are checked again and, if both are off the line, the same pivot is
//!   issued a second time rather than any search behavior;
//! - if both sensors are off the line on entry, no command is issued and the motors keep running
//!   the previous one.

use embedded_hal::delay::DelayNs;

use crate::drivers::{LineSensors, MotorCommand, MotorDriver, SensorChannel};
use crate::hw::{AnalogIn, AnalogOut};

/// Line-following controller over a motor driver and a sensor pair.
pub struct LineFollower<OUT, IN> {
    pub motors: MotorDriver<OUT>,
    pub sensors: LineSensors<IN>,
}

impl<OUT: AnalogOut, IN: AnalogIn> LineFollower<OUT, IN> {
    pub fn new(motors: MotorDriver<OUT>, sensors: LineSensors<IN>) -> Self {
        Self { motors, sensors }
    }

    pub fn free(self) -> (MotorDriver<OUT>, LineSensors<IN>) {
        (self.motors, self.sensors)
    }

    /// Run one control step at `speed` percent.
    ///
    /// Returns the command that was issued, or `None` if both sensors were off the line and the
    /// motors were left as they were.
    pub fn tick(&mut self, speed: i32) -> Option<MotorCommand> {
        use SensorChannel::{Left, Right};

        if self.on(Left) && self.on(Right) {
            let command = MotorCommand::straight(speed);
            trace!("follow: straight");
            self.motors.apply(command);
            return Some(command);
        }

        if !self.on(Left) && self.on(Right) {
            let command = MotorCommand::pivot_right(speed);
            trace!("follow: pivot, right motor off");
            self.motors.apply(command);
            if !self.on(Left) && !self.on(Right) {
                debug!("follow: both sensors off after pivot, repeating");
                self.motors.apply(command);
            }
            return Some(command);
        }

        if !self.on(Right) && self.on(Left) {
            let command = MotorCommand::pivot_left(speed);
            trace!("follow: pivot, left motor off");
            self.motors.apply(command);
            if !self.on(Left) && !self.on(Right) {
                debug!("follow: both sensors off after pivot, repeating");
                self.motors.apply(command);
            }
            return Some(command);
        }

        trace!("follow: no line, holding previous command");
        None
    }

    /// Drive both sides directly, bypassing the line logic.
    #[inline]
    pub fn drive(&mut self, left: i32, right: i32) {
        self.motors.set_speed(left, right);
    }

    #[inline]
    pub fn stop(&mut self) {
        self.motors.stop();
    }

    /// See [`MotorDriver::stand_up`].
    #[inline]
    pub fn stand_up<D: DelayNs>(&mut self, delay: &mut D, speed: i32, charge_ms: u32) {
        self.motors.stand_up(delay, speed, charge_ms);
    }

    #[inline]
    pub fn is_on_line(&mut self, channel: SensorChannel) -> bool {
        self.sensors.is_on_line(channel)
    }

    #[inline]
    fn on(&mut self, channel: SensorChannel) -> bool {
        self.sensors.is_on_line(channel)
    }
}
