use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Working schedule of the pool
// ---------------------------------------------------------------------------

/// Booking schedule rules: the fixed hour axis and the break-hour policy.
///
/// Constructed once and passed into the selection controller; alternate hour
/// ranges or break rules are plain data, not compile-time constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// First bookable hour, inclusive
    pub hour_start: u32,
    /// Last bookable hour, inclusive
    pub hour_end: u32,
    /// Hour blocked for booking on working days (Mon-Fri)
    pub break_hour: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            hour_start: 7,
            hour_end: 21,
            break_hour: 12,
        }
    }
}

impl ScheduleConfig {
    /// The fixed hour axis every per-hour wheel is indexed against.
    ///
    /// Constant length and order for the lifetime of the widget; positional
    /// alignment across wheels relies on this.
    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.hour_start..=self.hour_end
    }

    pub fn hour_count(&self) -> usize {
        (self.hour_end - self.hour_start + 1) as usize
    }

    /// Position of `hour` on the axis, `None` when outside the range
    pub fn hour_index(&self, hour: u32) -> Option<usize> {
        (self.hour_start..=self.hour_end)
            .contains(&hour)
            .then(|| (hour - self.hour_start) as usize)
    }

    /// Break predicate: pure function of the date, independent of loaded
    /// data. Holds even for dates with no slots, since the break still
    /// blocks booking for that hour.
    pub fn is_break(&self, date: NaiveDate, hour: u32) -> bool {
        hour == self.break_hour && date.weekday().number_from_monday() <= 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_hour_axis() {
        let cfg = ScheduleConfig::default();
        let axis: Vec<u32> = cfg.hours().collect();
        assert_eq!(axis.len(), 15);
        assert_eq!(axis.first(), Some(&7));
        assert_eq!(axis.last(), Some(&21));
        assert_eq!(cfg.hour_count(), 15);
    }

    #[test]
    fn test_hour_index() {
        let cfg = ScheduleConfig::default();
        assert_eq!(cfg.hour_index(7), Some(0));
        assert_eq!(cfg.hour_index(12), Some(5));
        assert_eq!(cfg.hour_index(21), Some(14));
        assert_eq!(cfg.hour_index(6), None);
        assert_eq!(cfg.hour_index(22), None);
    }

    #[test]
    fn test_break_on_working_days_only() {
        let cfg = ScheduleConfig::default();
        // 2024-06-05 is a Wednesday, 2024-06-08 a Saturday
        assert!(cfg.is_break(date("2024-06-05"), 12));
        assert!(!cfg.is_break(date("2024-06-08"), 12));
        assert!(!cfg.is_break(date("2024-06-09"), 12));
        assert!(!cfg.is_break(date("2024-06-05"), 13));
    }

    #[test]
    fn test_custom_break_rule() {
        let cfg = ScheduleConfig {
            hour_start: 8,
            hour_end: 20,
            break_hour: 13,
        };
        assert!(cfg.is_break(date("2024-06-03"), 13));
        assert!(!cfg.is_break(date("2024-06-03"), 12));
        assert_eq!(cfg.hour_index(8), Some(0));
        assert_eq!(cfg.hour_count(), 13);
    }
}
