//! Whole-year age calculation.

use chrono::{Datelike, NaiveDate};

/// Returns the age in completed years of someone born on `date_of_birth`,
/// as of `today`.
///
/// The year difference is reduced by one when this year's birthday has not
/// happened yet. A 29 February birthday is treated as reached on 1 March in
/// non-leap years.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::age_on;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1975, 5, 15).unwrap();
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()), 49);
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()), 50);
/// ```
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_today_counts() {
        assert_eq!(age_on(date(1975, 5, 15), date(2025, 5, 15)), 50);
    }

    #[test]
    fn test_day_before_birthday_is_a_year_younger() {
        assert_eq!(age_on(date(1975, 5, 15), date(2025, 5, 14)), 49);
    }

    #[test]
    fn test_later_month_same_day() {
        assert_eq!(age_on(date(1970, 7, 15), date(2025, 10, 1)), 55);
    }

    #[test]
    fn test_earlier_month_later_day() {
        assert_eq!(age_on(date(1990, 12, 1), date(2025, 2, 28)), 34);
    }

    #[test]
    fn test_leap_day_birthday_in_non_leap_year() {
        let dob = date(2000, 2, 29);
        assert_eq!(age_on(dob, date(2025, 2, 28)), 24);
        assert_eq!(age_on(dob, date(2025, 3, 1)), 25);
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        assert_eq!(age_on(date(2000, 2, 29), date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_born_today_is_zero() {
        assert_eq!(age_on(date(2025, 6, 1), date(2025, 6, 1)), 0);
    }
}
