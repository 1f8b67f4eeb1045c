//! # Countdown Arithmetic
//!
//! Decomposes remaining milliseconds into days, hours, minutes and seconds,
//! and selects which units a countdown displays.

use crate::config::CountdownConfig;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// A displayable countdown unit, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];
}

/// Remaining time split into calendar-free units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Decompose a remaining time. Negative input counts as zero.
    ///
    /// Hidden units are never folded into the next visible one: hours stay
    /// in `0..24` even when days are not displayed.
    pub fn from_millis(remaining_ms: i64) -> Self {
        let total = remaining_ms.max(0) / 1000;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    pub fn value(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Units to render, in fixed order: days, hours, minutes, seconds.
pub fn select_units(config: &CountdownConfig) -> Vec<Unit> {
    let mut units = Vec::with_capacity(4);
    if config.display_days() {
        units.push(Unit::Days);
    }
    if config.display_hours() {
        units.push(Unit::Hours);
    }
    units.push(Unit::Minutes);
    units.push(Unit::Seconds);
    units
}

/// Zero-pad to two digits. Larger values keep every digit.
pub fn format_value(value: i64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decompose_mixed() {
        let ms = (2 * SECONDS_PER_DAY + 3 * SECONDS_PER_HOUR + 4 * 60 + 5) * 1000 + 999;
        assert_eq!(
            Remaining::from_millis(ms),
            Remaining { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Remaining::from_millis(-5_000), Remaining::default());
        assert_eq!(Remaining::from_millis(-1), Remaining::default());
        assert_eq!(Remaining::from_millis(999), Remaining::default());
    }

    #[test]
    fn test_decomposition_ranges_hold_across_frames() {
        let samples = [0, 1, 999, 1_000, 59_999, 3_600_000, 86_399_999, 86_400_000, 1_234_567_890, 31_536_000_123];
        for diff in samples {
            for i in 0..30 {
                let remaining = diff - i * 1000;
                let r = Remaining::from_millis(remaining);
                assert!((0..60).contains(&r.seconds));
                assert!((0..60).contains(&r.minutes));
                assert!((0..24).contains(&r.hours));
                assert!(r.days >= 0);
                assert_eq!(r.total_seconds(), remaining.max(0) / 1000);
            }
        }
    }

    #[test]
    fn test_hidden_days_are_dropped_not_folded() {
        let r = Remaining::from_millis((3 * SECONDS_PER_DAY + 5 * SECONDS_PER_HOUR) * 1000);
        assert_eq!(r.hours, 5);
    }

    #[test]
    fn test_format_value_zero_pads() {
        for v in 0..10 {
            let s = format_value(v);
            assert_eq!(s.len(), 2);
            assert!(s.starts_with('0'));
        }
        assert_eq!(format_value(42), "42");
        assert_eq!(format_value(100), "100");
        assert_eq!(format_value(12345), "12345");
    }

    #[test]
    fn test_select_units_order() {
        let mut config = CountdownConfig::default();
        assert_eq!(select_units(&config), Unit::ALL.to_vec());

        config.display_days = Some(false);
        assert_eq!(select_units(&config), vec![Unit::Hours, Unit::Minutes, Unit::Seconds]);

        config.display_hours = Some(false);
        assert_eq!(select_units(&config), vec![Unit::Minutes, Unit::Seconds]);

        config.display_days = Some(true);
        assert_eq!(select_units(&config), vec![Unit::Days, Unit::Minutes, Unit::Seconds]);
    }

    #[test]
    fn test_units_are_subsequence_of_all() {
        for days in [true, false] {
            for hours in [true, false] {
                let config = CountdownConfig {
                    display_days: Some(days),
                    display_hours: Some(hours),
                    ..Default::default()
                };
                let units = select_units(&config);
                let mut all = Unit::ALL.iter();
                assert!(units.iter().all(|u| all.any(|a| a == u)));
            }
        }
    }
}
