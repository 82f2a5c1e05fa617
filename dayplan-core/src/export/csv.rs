//! Flat CSV export: one row per event.
//!
//! Fields are joined with `,` as-is. A name or description containing a comma
//! or newline will shift columns for that row; readers that need exact fields
//! should use the JSON export.

use crate::store::Snapshot;

pub const CSV_HEADER: &str = "Date,Event Name,Start Time,End Time,Description";

pub fn to_csv(snapshot: &Snapshot) -> String {
    let rows = snapshot.iter().flat_map(|(date, events)| {
        events.iter().map(move |event| {
            [
                date.format("%Y-%m-%d").to_string(),
                event.name.clone(),
                event.start_time.to_string(),
                event.end_time.to_string(),
                event.description_text().to_string(),
            ]
            .join(",")
        })
    });

    std::iter::once(CSV_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn event(name: &str, start: &str, end: &str) -> Event {
        Event::new(name, start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_empty_snapshot_is_header_only() {
        assert_eq!(to_csv(&Snapshot::new()), CSV_HEADER);
    }

    #[test]
    fn test_single_event_is_two_lines() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(
            date("2024-03-10"),
            vec![event("Standup", "09:00", "09:30").with_description("daily sync")],
        );

        let csv = to_csv(&snapshot);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![CSV_HEADER, "2024-03-10,Standup,09:00,09:30,daily sync"]
        );
    }

    #[test]
    fn test_rows_follow_date_then_bucket_order() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(
            date("2024-03-11"),
            vec![event("Review", "14:00", "15:00")],
        );
        snapshot.insert(
            date("2024-03-10"),
            vec![event("Lunch", "12:00", "13:00"), event("Standup", "09:00", "09:30")],
        );

        let csv = to_csv(&snapshot);
        let names: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap())
            .collect();
        assert_eq!(names, vec!["Lunch", "Standup", "Review"]);
    }

    #[test]
    fn test_delimiters_are_not_escaped() {
        let mut snapshot = Snapshot::new();
        snapshot.insert(
            date("2024-03-10"),
            vec![event("Lunch", "12:00", "13:00").with_description("tacos, burritos")],
        );

        let csv = to_csv(&snapshot);
        assert_eq!(
            csv.lines().nth(1),
            Some("2024-03-10,Lunch,12:00,13:00,tacos, burritos")
        );
    }
}
