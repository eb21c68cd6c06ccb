/// Utilities for date and time formatting
///
/// Provides consistent Russian date/time labels across the booking widgets

use chrono::{Datelike, NaiveDate};

const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const WEEKDAYS_RU: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

/// Format a date as "3 июня"
pub fn format_date_ru_long(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_RU[date.month0() as usize])
}

/// Russian weekday name, "Среда"
pub fn weekday_ru(date: NaiveDate) -> &'static str {
    WEEKDAYS_RU[date.weekday().num_days_from_monday() as usize]
}

/// Format an hour-of-day as "07:00"
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_date_ru_long() {
        assert_eq!(format_date_ru_long(date("2024-06-03")), "3 июня");
        assert_eq!(format_date_ru_long(date("2024-12-31")), "31 декабря");
        assert_eq!(format_date_ru_long(date("2025-01-01")), "1 января");
    }

    #[test]
    fn test_weekday_ru() {
        assert_eq!(weekday_ru(date("2024-06-03")), "Понедельник");
        assert_eq!(weekday_ru(date("2024-06-05")), "Среда");
        assert_eq!(weekday_ru(date("2024-06-09")), "Воскресенье");
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(7), "07:00");
        assert_eq!(format_hour(21), "21:00");
    }
}
