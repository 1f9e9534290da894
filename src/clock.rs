//! Reads slider angles as times on a 12-hour dial.

use crate::gui::slider::geometry::normalize_angle;
use derive_more::Display;
use std::f64::consts::TAU;

pub const MINUTE_STEP: u32 = 5;
const STEPS_PER_TURN: f64 = 12.0 * 60.0 / MINUTE_STEP as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{hours:02}:{minutes:02}")]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
}

/// Minutes covered by `angle`, snapped to [`MINUTE_STEP`]. Angles that round up to a full
/// turn read as 0.
pub fn minutes_from_angle(angle: f64) -> u32 {
    let steps = (normalize_angle(angle) / (TAU / STEPS_PER_TURN)).round() as u32;
    (steps % STEPS_PER_TURN as u32) * MINUTE_STEP
}

pub fn time_from_angle(angle: f64) -> ClockTime {
    let minutes = minutes_from_angle(angle);
    ClockTime {
        hours: minutes / 60,
        minutes: minutes % 60,
    }
}

pub fn format_duration(angle_length: f64) -> String {
    let t = time_from_angle(angle_length);
    format!("{}h {}m", t.hours, t.minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_minutes_from_angle() {
        let cases = vec![
            (0.0, 0),
            (PI, 360),
            (PI / 6.0, 60),
            (PI * 10.0 / 6.0, 600),
            (TAU / 144.0 * 0.4, 0),
            (TAU / 144.0 * 0.6, 5),
            (TAU - 1e-3, 0),
            (-1e-3, 0),
            (TAU - TAU / 144.0, 715),
        ];

        for (angle, expected) in cases {
            assert_eq!(minutes_from_angle(angle), expected, "angle {}", angle);
        }
    }

    #[test]
    fn test_time_from_angle() {
        assert_eq!(time_from_angle(PI * 10.0 / 6.0).to_string(), "10:00");
        assert_eq!(time_from_angle(PI * 5.0 / 12.0).to_string(), "02:30");
        assert_eq!(time_from_angle(0.0).to_string(), "00:00");
        assert_eq!(time_from_angle(TAU - 1e-3).to_string(), "00:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(PI * 7.0 / 6.0), "7h 0m");
        assert_eq!(format_duration(PI * 7.5 / 6.0), "7h 30m");
        assert_eq!(format_duration(0.0), "0h 0m");
    }
}
