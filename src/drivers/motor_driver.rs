// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Differential-drive motor driver.
//!
//! Each side of the car has a forward and a backward PWM pin. A signed speed percentage picks the
//! pin (sign) and its duty cycle (magnitude); the other pin of the pair is always held at zero.
//!
//! Speeds are nominally `-100..=100`. Anything outside that range is not clamped and simply maps
//! past `pwm_max`, saturating at `u16::MAX`.

use embedded_hal::delay::DelayNs;

use crate::hw::{AnalogOut, PinMap};

/// Speed percentage that maps to `PinMap::pwm_max`.
pub const SPEED_FULL_SCALE: i32 = 100;

/// How long [`MotorDriver::stand_up`] reverses before charging forward.
pub const STAND_UP_REVERSE_MS: u32 = 200;

/// Signed left/right speed percentages for one actuation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorCommand {
    pub left: i32,
    pub right: i32,
}

impl MotorCommand {
    pub const STOP: MotorCommand = MotorCommand { left: 0, right: 0 };

    #[inline]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Both sides at `speed`.
    #[inline]
    pub const fn straight(speed: i32) -> Self {
        Self::new(speed, speed)
    }

    /// Left side driven, right side off.
    #[inline]
    pub const fn pivot_right(speed: i32) -> Self {
        Self::new(speed, 0)
    }

    /// Right side driven, left side off.
    #[inline]
    pub const fn pivot_left(speed: i32) -> Self {
        Self::new(0, speed)
    }
}

/// Two-sided motor driver over four analog output pins.
pub struct MotorDriver<OUT> {
    out: OUT,
    pins: PinMap,
}

impl<OUT: AnalogOut> MotorDriver<OUT> {
    /// Bind the driver to an output bank with the given wiring.
    ///
    /// Pins are left untouched until the first command; call [`stop`](Self::stop) to put them in
    /// a known state.
    pub fn new(out: OUT, pins: PinMap) -> Self {
        Self { out, pins }
    }

    #[inline]
    pub fn pins(&self) -> &PinMap {
        &self.pins
    }

    /// Release the output bank.
    pub fn free(self) -> OUT {
        self.out
    }

    /// Duty cycle for a speed percentage: `round(|speed| / 100 * pwm_max)`.
    pub fn duty_for(&self, speed: i32) -> u16 {
        let pct = speed.unsigned_abs() as u64;
        let full = SPEED_FULL_SCALE as u64;
        let duty = (pct * self.pins.pwm_max as u64 + full / 2) / full;
        u16::try_from(duty).unwrap_or(u16::MAX)
    }

    /// Drive the left and right sides at signed speed percentages.
    pub fn set_speed(&mut self, left: i32, right: i32) {
        trace!("motors: left={} right={}", left, right);

        let (fwd, back) = (self.pins.left_forward, self.pins.left_backward);
        self.drive_side(fwd, back, left);

        let (fwd, back) = (self.pins.right_forward, self.pins.right_backward);
        self.drive_side(fwd, back, right);
    }

    #[inline]
    pub fn apply(&mut self, command: MotorCommand) {
        self.set_speed(command.left, command.right);
    }

    /// Zero all four pins.
    pub fn stop(&mut self) {
        debug!("motors: stop");
        self.out.write_analog(self.pins.left_backward, 0);
        self.out.write_analog(self.pins.left_forward, 0);
        self.out.write_analog(self.pins.right_backward, 0);
        self.out.write_analog(self.pins.right_forward, 0);
    }

    /// Self-righting maneuver: reverse for 200 ms, charge forward for `charge_ms`, then stop.
    ///
    /// Open loop. If the car does not come up, raise `speed` or `charge_ms`.
    pub fn stand_up<D: DelayNs>(&mut self, delay: &mut D, speed: i32, charge_ms: u32) {
        debug!("stand up: reverse at {}", speed);
        self.set_speed(speed.saturating_neg(), speed.saturating_neg());
        delay.delay_ms(STAND_UP_REVERSE_MS);

        debug!("stand up: charge for {} ms", charge_ms);
        self.set_speed(speed, speed);
        delay.delay_ms(charge_ms);

        self.stop();
    }

    /// The idle pin of the pair is always written first.
    fn drive_side(&mut self, forward_pin: u8, backward_pin: u8, speed: i32) {
        let duty = self.duty_for(speed);
        if speed >= 0 {
            self.out.write_analog(backward_pin, 0);
            self.out.write_analog(forward_pin, duty);
        } else {
            self.out.write_analog(forward_pin, 0);
            self.out.write_analog(backward_pin, duty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Event, SimBoard, SimDelay};

    const PINS: PinMap = PinMap::BITCAR;

    fn driver() -> (MotorDriver<SimBoard>, SimBoard) {
        let board = SimBoard::new();
        (MotorDriver::new(board.clone(), PINS), board)
    }

    fn expected_duty(speed: i32) -> u16 {
        (speed.abs() as f64 / 100.0 * PINS.pwm_max as f64).round() as u16
    }

    #[test]
    fn forward_speeds_drive_forward_pins_only() {
        let (mut motors, board) = driver();
        for s in 0..=100 {
            motors.set_speed(s, s);
            assert_eq!(board.duty(PINS.left_forward), expected_duty(s), "speed {s}");
            assert_eq!(board.duty(PINS.right_forward), expected_duty(s), "speed {s}");
            assert_eq!(board.duty(PINS.left_backward), 0);
            assert_eq!(board.duty(PINS.right_backward), 0);
        }
    }

    #[test]
    fn reverse_speeds_drive_backward_pins_only() {
        let (mut motors, board) = driver();
        for s in -100..0 {
            motors.set_speed(s, s);
            assert_eq!(board.duty(PINS.left_backward), expected_duty(s), "speed {s}");
            assert_eq!(board.duty(PINS.right_backward), expected_duty(s), "speed {s}");
            assert_eq!(board.duty(PINS.left_forward), 0);
            assert_eq!(board.duty(PINS.right_forward), 0);
        }
    }

    #[test]
    fn duty_rounds_half_up() {
        let (motors, _) = driver();
        assert_eq!(motors.duty_for(50), 512);
        assert_eq!(motors.duty_for(-50), 512);
        assert_eq!(motors.duty_for(1), 10);
        assert_eq!(motors.duty_for(100), 1023);
    }

    #[test]
    fn out_of_range_speeds_pass_through_the_mapping() {
        let (motors, _) = driver();
        assert_eq!(motors.duty_for(200), 2046);
        assert_eq!(motors.duty_for(i32::MAX), u16::MAX);
        assert_eq!(motors.duty_for(i32::MIN), u16::MAX);
    }

    #[test]
    fn idle_pin_is_zeroed_before_active_pin() {
        let (mut motors, board) = driver();
        motors.set_speed(60, -60);
        assert_eq!(
            board.writes(),
            [
                (PINS.left_backward, 0),
                (PINS.left_forward, 614),
                (PINS.right_forward, 0),
                (PINS.right_backward, 614),
            ]
        );
    }

    #[test]
    fn sides_are_independent() {
        let (mut motors, board) = driver();
        motors.apply(MotorCommand::new(-30, 80));
        assert_eq!(board.duty(PINS.left_backward), 307);
        assert_eq!(board.duty(PINS.left_forward), 0);
        assert_eq!(board.duty(PINS.right_forward), 818);
        assert_eq!(board.duty(PINS.right_backward), 0);
    }

    #[test]
    fn stop_zeroes_everything_and_is_idempotent() {
        let (mut motors, board) = driver();
        motors.set_speed(100, -100);

        motors.stop();
        let first = board.duties();
        motors.stop();
        let second = board.duties();

        assert_eq!(first, second);
        for pin in [
            PINS.left_forward,
            PINS.left_backward,
            PINS.right_forward,
            PINS.right_backward,
        ] {
            assert_eq!(board.duty(pin), 0);
        }
    }

    #[test]
    fn stand_up_reverses_then_charges_then_stops() {
        let (mut motors, board) = driver();
        let mut delay = SimDelay::new(&board);

        motors.stand_up(&mut delay, 100, 250);

        let full = PINS.pwm_max;
        assert_eq!(
            board.events(),
            [
                Event::Write(PINS.left_forward, 0),
                Event::Write(PINS.left_backward, full),
                Event::Write(PINS.right_forward, 0),
                Event::Write(PINS.right_backward, full),
                Event::DelayMs(200),
                Event::Write(PINS.left_backward, 0),
                Event::Write(PINS.left_forward, full),
                Event::Write(PINS.right_backward, 0),
                Event::Write(PINS.right_forward, full),
                Event::DelayMs(250),
                Event::Write(PINS.left_backward, 0),
                Event::Write(PINS.left_forward, 0),
                Event::Write(PINS.right_backward, 0),
                Event::Write(PINS.right_forward, 0),
            ]
        );
    }

    #[test]
    fn borrowed_bank_can_be_released_and_reused() {
        let mut board = SimBoard::new();
        {
            let mut motors = MotorDriver::new(&mut board, PINS);
            motors.set_speed(100, 0);
        }
        assert_eq!(board.duty(PINS.left_forward), 1023);

        let board = MotorDriver::new(board, PINS).free();
        assert_eq!(board.writes().len(), 4);
    }

    #[test]
    fn commands_build_expected_pairs() {
        assert_eq!(MotorCommand::straight(40), MotorCommand::new(40, 40));
        assert_eq!(MotorCommand::pivot_right(40), MotorCommand::new(40, 0));
        assert_eq!(MotorCommand::pivot_left(40), MotorCommand::new(0, 40));
        assert_eq!(MotorCommand::STOP, MotorCommand::new(0, 0));
    }
}
