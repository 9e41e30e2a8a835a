use chrono::{Days, NaiveDate};

use crate::errors::Result;

/// Day 0 of the catalogue's integer date columns.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1970, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Converts a calendar date to the integer day number stored in date columns.
///
/// Dates before the epoch map to negative numbers.
pub fn to_day_number(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

/// Converts a stored day number back to a calendar date.
///
/// Returns `None` when the number falls outside chrono's date range.
pub fn from_day_number(day: i64) -> Option<NaiveDate> {
    if day >= 0 {
        EPOCH.checked_add_days(Days::new(day as u64))
    } else {
        EPOCH.checked_sub_days(Days::new(day.unsigned_abs()))
    }
}

/// Parses a `YYYY-MM-DD` string into a day number.
pub fn parse_day_number(value: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
    Ok(to_day_number(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_day_zero() {
        assert_eq!(to_day_number(EPOCH), 0);
        assert_eq!(from_day_number(0), Some(EPOCH));
    }

    #[test]
    fn test_known_date() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 18).unwrap();
        assert_eq!(to_day_number(date), 18614);
        assert_eq!(from_day_number(18614), Some(date));
    }

    #[test]
    fn test_pre_epoch_dates_are_negative() {
        let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        assert_eq!(to_day_number(date), -1);
        assert_eq!(from_day_number(-1), Some(date));
    }

    #[test]
    fn test_out_of_range_day_number() {
        assert_eq!(from_day_number(i64::MAX), None);
    }

    #[test]
    fn test_parse_day_number() {
        assert_eq!(parse_day_number("1970-01-02").unwrap(), 1);
        assert!(parse_day_number("2020-13-01").is_err());
    }
}
