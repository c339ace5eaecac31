// src/animation/speed.rs
//
// User speed control. The slider value 1..=100 maps onto a multiplier that
// is geometric on each side of the midpoint: 1 -> min, 50 -> 1.0, 100 -> max.

use log::debug;

use crate::config::SpeedConfig;

pub const SPEED_MIN_VALUE: u8 = 1;
pub const SPEED_MID_VALUE: u8 = 50;
pub const SPEED_MAX_VALUE: u8 = 100;

/// Maps a slider value onto a speed multiplier. Out-of-range values clamp.
pub fn speed_multiplier(value: f32, min: f32, max: f32) -> f32 {
    let value = value.clamp(SPEED_MIN_VALUE as f32, SPEED_MAX_VALUE as f32);
    let mid = SPEED_MID_VALUE as f32;

    if value <= mid {
        let t = (value - SPEED_MIN_VALUE as f32) / (mid - SPEED_MIN_VALUE as f32);
        (min.ln() * (1.0 - t)).exp()
    } else {
        let t = (value - mid) / (SPEED_MAX_VALUE as f32 - mid);
        (max.ln() * t).exp()
    }
}

#[derive(Debug, Clone)]
pub struct SpeedControl {
    value: u8,
    step: u8,
    min_multiplier: f32,
    max_multiplier: f32,
}

impl SpeedControl {
    pub fn new(config: &SpeedConfig) -> Self {
        let mut control = Self {
            value: SPEED_MID_VALUE,
            step: config.step.max(1),
            min_multiplier: config.min_multiplier,
            max_multiplier: config.max_multiplier,
        };
        control.set(config.initial_value);
        control
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn multiplier(&self) -> f32 {
        speed_multiplier(self.value as f32, self.min_multiplier, self.max_multiplier)
    }

    pub fn set(&mut self, value: u8) {
        self.value = value.clamp(SPEED_MIN_VALUE, SPEED_MAX_VALUE);
        debug!("Speed set to {} (x{:.2})", self.value, self.multiplier());
    }

    /// Moves the slider by `steps` configured increments.
    pub fn nudge(&mut self, steps: i32) {
        let target = self.value as i32 + steps * self.step as i32;
        self.set(target.clamp(SPEED_MIN_VALUE as i32, SPEED_MAX_VALUE as i32) as u8);
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(&SpeedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: f32 = 1.0 / 3.0;
    const MAX: f32 = 3.0;

    mod mapping_tests {
        use super::*;

        #[test]
        fn test_anchor_points() {
            assert!((speed_multiplier(1.0, MIN, MAX) - MIN).abs() < 1e-4);
            assert!((speed_multiplier(50.0, MIN, MAX) - 1.0).abs() < 1e-6);
            assert!((speed_multiplier(100.0, MIN, MAX) - MAX).abs() < 1e-4);
        }

        #[test]
        fn test_out_of_range_clamps() {
            assert_eq!(speed_multiplier(0.0, MIN, MAX), speed_multiplier(1.0, MIN, MAX));
            assert_eq!(speed_multiplier(250.0, MIN, MAX), speed_multiplier(100.0, MIN, MAX));
        }

        #[test]
        fn test_monotonic() {
            let mut previous = 0.0;
            for value in 1..=100 {
                let m = speed_multiplier(value as f32, MIN, MAX);
                assert!(m > previous, "not increasing at {}", value);
                previous = m;
            }
        }

        #[test]
        fn test_geometric_midpoints() {
            // halfway up each side lands on the geometric mean
            let upper = speed_multiplier(75.0, MIN, MAX);
            assert!((upper - MAX.sqrt()).abs() < 1e-4);
            let lower = speed_multiplier(25.5, MIN, MAX);
            assert!((lower - MIN.sqrt()).abs() < 1e-4);
        }
    }

    mod control_tests {
        use super::*;

        #[test]
        fn test_starts_at_configured_value() {
            let control = SpeedControl::default();
            assert_eq!(control.value(), 50);
            assert!((control.multiplier() - 1.0).abs() < 1e-6);
        }

        #[test]
        fn test_nudge_clamps_at_ends() {
            let mut control = SpeedControl::default();
            control.nudge(100);
            assert_eq!(control.value(), SPEED_MAX_VALUE);
            control.nudge(-100);
            assert_eq!(control.value(), SPEED_MIN_VALUE);
            control.nudge(1);
            assert_eq!(control.value(), 6);
        }

        #[test]
        fn test_set_clamps_zero() {
            let mut control = SpeedControl::default();
            control.set(0);
            assert_eq!(control.value(), SPEED_MIN_VALUE);
        }
    }
}
