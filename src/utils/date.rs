use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date in the `YYYY-MM-DD` form used by new records.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}
