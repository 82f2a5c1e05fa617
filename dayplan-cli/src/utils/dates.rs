//! Date arguments accepted on the command line.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Parse a day argument: `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();

    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| format!("Invalid date '{}'. Expected YYYY-MM-DD", s)),
    }
}

/// Parse a month argument (`YYYY-MM`) into the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month '{}'. Expected YYYY-MM", s))
}

/// Weeks (Sunday first) covering the month that starts on `first`. Days
/// outside the month are `None`.
pub fn month_grid(first: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let mut weeks = Vec::new();
    let mut week = [None; 7];

    let mut slot = first.weekday().num_days_from_sunday() as usize;
    let mut day = Some(first);

    while let Some(date) = day.filter(|d| d.month() == first.month()) {
        week[slot] = Some(date);
        slot += 1;

        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }

        day = date.succ_opt();
    }

    if slot > 0 {
        weeks.push(week);
    }

    weeks
}

/// Convert a 1-based position shown to the user into a bucket index.
pub fn to_index(position: usize) -> Result<usize, String> {
    position
        .checked_sub(1)
        .ok_or_else(|| "Event numbers start at 1".to_string())
}
