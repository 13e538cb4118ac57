//! Pure formatting helpers for calendar headers, hour labels, and weekday
//! abbreviations.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::{SlotError, ViewMode};

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}

pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}

/// Zero-padded hour label, the canonical form cells carry ("09:00").
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// Parse an hour label back to its hour. Accepts both "09:00" and "9:00";
/// anything with minutes or out of range is rejected.
pub fn parse_hour_label(label: &str) -> Result<u32, SlotError> {
    let invalid = || SlotError::InvalidHourLabel(label.to_string());
    let (hour_str, minute_str) = label.split_once(':').ok_or_else(invalid)?;
    if minute_str != "00" {
        return Err(invalid());
    }
    let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
    if hour > 23 {
        return Err(invalid());
    }
    Ok(hour)
}

/// Header title for the visible window: "March 5, 2025" (day),
/// "Mar 5 - Mar 11, 2025" (week), "March 2025" (month).
pub fn range_label(anchor: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Day => format!(
            "{} {}, {}",
            month_name(anchor.month()),
            anchor.day(),
            anchor.year()
        ),
        ViewMode::Week => {
            let end = anchor + Duration::days(6);
            if anchor.year() == end.year() {
                format!(
                    "{} {} - {} {}, {}",
                    month_abbrev(anchor.month()),
                    anchor.day(),
                    month_abbrev(end.month()),
                    end.day(),
                    anchor.year()
                )
            } else {
                format!(
                    "{} {}, {} - {} {}, {}",
                    month_abbrev(anchor.month()),
                    anchor.day(),
                    anchor.year(),
                    month_abbrev(end.month()),
                    end.day(),
                    end.year()
                )
            }
        }
        ViewMode::Month => format!("{} {}", month_name(anchor.month()), anchor.year()),
    }
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn hour_labels_round_trip() {
        assert_eq!(hour_label(9), "09:00");
        assert_eq!(parse_hour_label("09:00"), Ok(9));
        assert_eq!(parse_hour_label("9:00"), Ok(9));
        assert_eq!(parse_hour_label("23:00"), Ok(23));
    }

    #[test]
    fn non_hour_labels_are_rejected() {
        for bad in ["09:30", "24:00", "morning", "9", ":00"] {
            assert!(parse_hour_label(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn range_labels_per_view_mode() {
        let anchor = date(2025, 3, 5);
        assert_eq!(range_label(anchor, ViewMode::Day), "March 5, 2025");
        assert_eq!(range_label(anchor, ViewMode::Week), "Mar 5 - Mar 11, 2025");
        assert_eq!(range_label(anchor, ViewMode::Month), "March 2025");
    }

    #[test]
    fn week_label_spanning_a_year_boundary() {
        let anchor = date(2025, 12, 29);
        assert_eq!(
            range_label(anchor, ViewMode::Week),
            "Dec 29, 2025 - Jan 4, 2026"
        );
    }
}
