use chrono::{Datelike as _, NaiveDate};
use model::sales::SalesRecord;

/// Calendar month number regardless of year, as the month reports filter.
pub fn in_month(record: &SalesRecord, month: u32) -> bool {
    record.transaction_date.month() == month
}

/// `YYYY-MM`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Full English weekday name.
pub fn day_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        let date = NaiveDate::from_ymd_opt(2019, 4, 9).unwrap();
        assert_eq!(month_label(date), "2019-04");
    }

    #[test]
    fn test_day_name() {
        let date = NaiveDate::from_ymd_opt(2019, 4, 1).unwrap();
        assert_eq!(date.weekday().num_days_from_monday(), 0);
        assert_eq!(day_name(date), "Monday");
        assert_eq!(day_name(NaiveDate::from_ymd_opt(2019, 4, 7).unwrap()), "Sunday");
    }
}
