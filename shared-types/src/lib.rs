use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod calendar;
pub mod format;

/// Availability status of a single calendar cell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    Available,
    Unavailable,
    Selected,
    Partial,
    Blocked,
}

impl CellStatus {
    /// Whether a cell with this status may participate in selection.
    /// Unavailable and blocked cells are rejected before any transition runs.
    pub fn is_selectable(self) -> bool {
        matches!(
            self,
            CellStatus::Available | CellStatus::Partial | CellStatus::Selected
        )
    }

    pub fn as_class(self) -> &'static str {
        match self {
            CellStatus::Available => "available",
            CellStatus::Unavailable => "unavailable",
            CellStatus::Selected => "selected",
            CellStatus::Partial => "partial",
            CellStatus::Blocked => "blocked",
        }
    }
}

/// One addressable date/time slot. Time-of-day is conveyed through `label`
/// (an hour string such as "09:00"), not through `date`.
///
/// `id` must be unique within a single cell list; the library does no
/// deduplication and lookup behavior with duplicate ids is last-write-wins.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalendarCell {
    pub id: String,
    pub date: NaiveDate,
    pub status: CellStatus,
    pub label: Option<String>,
    pub price: Option<String>,
}

/// Display metadata for one legend swatch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LegendItem {
    pub status: CellStatus,
    pub label: String,
    pub color: String,
}

/// Granularity of the visible grid.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

/// Discipline governing how clicks accumulate into a selection set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    Multiple,
    Range,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotError {
    #[error("not an hour label: {0:?}")]
    InvalidHourLabel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_lowercase() {
        // The wire form consumers see, e.g. when cells arrive as JSON.
        let cell = CalendarCell {
            id: "slot-2025-01-02-09".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            status: CellStatus::Partial,
            label: Some("09:00".to_string()),
            price: None,
        };
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["status"], "partial");
        assert_eq!(json["date"], "2025-01-02");
    }

    #[test]
    fn selectability_gate_per_status() {
        assert!(CellStatus::Available.is_selectable());
        assert!(CellStatus::Partial.is_selectable());
        assert!(CellStatus::Selected.is_selectable());
        assert!(!CellStatus::Unavailable.is_selectable());
        assert!(!CellStatus::Blocked.is_selectable());
    }
}
