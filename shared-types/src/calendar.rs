//! Grid building, cell lookup, and selection transitions for the slot
//! calendar. Everything here is pure: the component (or any other caller)
//! owns the selection state and commits the results of these functions.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::{format, CalendarCell, SelectionMode, ViewMode};

/// Ordered list of dates the grid renders for `anchor` in the given view.
///
/// Week view starts exactly at `anchor` and does not snap to a week
/// boundary; month view does snap, expanding to full Sunday-started weeks.
/// The asymmetry is intentional and matches the shipped behavior.
pub fn visible_dates(anchor: NaiveDate, mode: ViewMode) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![anchor],
        ViewMode::Week => (0..7).map(|i| anchor + Duration::days(i)).collect(),
        ViewMode::Month => {
            let first = anchor.with_day(1).unwrap_or(anchor);
            let last = last_day_of_month(anchor);
            let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
            let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);
            start.iter_days().take_while(|d| *d <= end).collect()
        }
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// Find the cell for a date and, optionally, an hour slot.
///
/// Date matching is day-granular. Hour matching goes through the cell's
/// `label`, accepting both the zero-padded ("09:00") and unpadded ("9:00")
/// forms. Returns `None` when nothing matches; synthesizing a placeholder
/// for empty slots is the caller's policy, not the resolver's.
pub fn find_cell<'a>(
    cells: &'a [CalendarCell],
    date: NaiveDate,
    hour: Option<u32>,
) -> Option<&'a CalendarCell> {
    cells.iter().find(|cell| {
        if cell.date != date {
            return false;
        }
        match hour {
            None => true,
            Some(h) => cell
                .label
                .as_deref()
                .and_then(|label| format::parse_hour_label(label).ok())
                .map(|label_hour| label_hour == h)
                .unwrap_or(false),
        }
    })
}

/// Build the id → cell lookup used for selection membership checks.
///
/// Rebuilt whenever the cell list changes; duplicate ids are last-write-wins.
pub fn cell_index(cells: &[CalendarCell]) -> HashMap<String, CalendarCell> {
    cells
        .iter()
        .map(|cell| (cell.id.clone(), cell.clone()))
        .collect()
}

/// Compute the next selection set for a click on `clicked`.
///
/// The caller must gate clicks with [`CellStatus::is_selectable`] before
/// calling this; the transition assumes `clicked` is eligible. It never
/// mutates anything. In range mode the result follows `all_cells` iteration
/// order, not chronological order, when the input list is unsorted.
///
/// [`CellStatus::is_selectable`]: crate::CellStatus::is_selectable
pub fn next_selection(
    current: &[String],
    clicked: &CalendarCell,
    mode: SelectionMode,
    all_cells: &[CalendarCell],
) -> Vec<String> {
    match mode {
        SelectionMode::Single => {
            if current.len() == 1 && current[0] == clicked.id {
                vec![]
            } else {
                vec![clicked.id.clone()]
            }
        }
        SelectionMode::Multiple => {
            let mut next = current.to_vec();
            if let Some(pos) = next.iter().position(|id| *id == clicked.id) {
                next.remove(pos);
            } else {
                next.push(clicked.id.clone());
            }
            next
        }
        SelectionMode::Range => match current {
            [] => vec![clicked.id.clone()],
            [anchor_id] => {
                // A stale anchor id (cell no longer in the list) restarts
                // the range at the clicked cell.
                let Some(anchor) = all_cells.iter().find(|cell| cell.id == *anchor_id) else {
                    return vec![clicked.id.clone()];
                };
                let start = anchor.date.min(clicked.date);
                let end = anchor.date.max(clicked.date);
                all_cells
                    .iter()
                    .filter(|cell| cell.date >= start && cell.date <= end)
                    .map(|cell| cell.id.clone())
                    .collect()
            }
            _ => vec![clicked.id.clone()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cell(id: &str, on: NaiveDate, status: CellStatus) -> CalendarCell {
        CalendarCell {
            id: id.to_string(),
            date: on,
            status,
            label: None,
            price: None,
        }
    }

    fn hour_cell(id: &str, on: NaiveDate, label: &str) -> CalendarCell {
        CalendarCell {
            id: id.to_string(),
            date: on,
            status: CellStatus::Available,
            label: Some(label.to_string()),
            price: None,
        }
    }

    #[test]
    fn day_view_is_just_the_anchor() {
        let anchor = date(2025, 3, 14);
        assert_eq!(visible_dates(anchor, ViewMode::Day), vec![anchor]);
    }

    #[test]
    fn week_view_is_seven_days_from_anchor_unsnapped() {
        // A Wednesday: the week must start there, not at the nearest Sunday.
        let anchor = date(2025, 3, 12);
        let dates = visible_dates(anchor, ViewMode::Week);
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], anchor);
        assert_eq!(dates[6], date(2025, 3, 18));
    }

    #[test]
    fn month_view_expands_to_full_weeks() {
        for anchor in [
            date(2025, 3, 14),
            date(2024, 2, 29), // leap February
            date(2025, 12, 1),
            date(2026, 1, 31),
        ] {
            let dates = visible_dates(anchor, ViewMode::Month);
            assert_eq!(dates.len() % 7, 0, "anchor {anchor}");
            assert_eq!(
                dates[0].weekday(),
                chrono::Weekday::Sun,
                "anchor {anchor}"
            );
            assert_eq!(
                dates[dates.len() - 1].weekday(),
                chrono::Weekday::Sat,
                "anchor {anchor}"
            );
            // Every day of the anchor's month is present.
            let last = last_day_of_month(anchor);
            for day in 1..=last.day() {
                let expected = anchor.with_day(day).unwrap();
                assert!(dates.contains(&expected), "missing {expected}");
            }
            // Ordered and gapless.
            for pair in dates.windows(2) {
                assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }

    #[test]
    fn find_cell_matches_by_day() {
        let cells = vec![
            cell("a", date(2025, 1, 1), CellStatus::Available),
            cell("b", date(2025, 1, 2), CellStatus::Blocked),
        ];
        assert_eq!(find_cell(&cells, date(2025, 1, 2), None).map(|c| &*c.id), Some("b"));
        assert!(find_cell(&cells, date(2025, 1, 3), None).is_none());
    }

    #[test]
    fn find_cell_accepts_padded_and_unpadded_hour_labels() {
        let on = date(2025, 1, 1);
        let cells = vec![
            hour_cell("padded", on, "09:00"),
            hour_cell("bare", on, "10:00"),
            hour_cell("unpadded", date(2025, 1, 2), "9:00"),
        ];
        assert_eq!(find_cell(&cells, on, Some(9)).map(|c| &*c.id), Some("padded"));
        assert_eq!(
            find_cell(&cells, date(2025, 1, 2), Some(9)).map(|c| &*c.id),
            Some("unpadded")
        );
        // A label with minutes is not an hour slot.
        let odd = vec![hour_cell("x", on, "09:30")];
        assert!(find_cell(&odd, on, Some(9)).is_none());
    }

    #[test]
    fn cell_index_is_last_write_wins_on_duplicate_ids() {
        let cells = vec![
            cell("dup", date(2025, 1, 1), CellStatus::Available),
            cell("dup", date(2025, 1, 2), CellStatus::Blocked),
        ];
        let index = cell_index(&cells);
        assert_eq!(index.len(), 1);
        assert_eq!(index["dup"].date, date(2025, 1, 2));
    }

    #[test]
    fn single_mode_toggles_the_sole_selection() {
        let c = cell("a", date(2025, 1, 1), CellStatus::Available);
        let all = vec![c.clone()];
        let first = next_selection(&[], &c, SelectionMode::Single, &all);
        assert_eq!(first, vec!["a"]);
        let second = next_selection(&first, &c, SelectionMode::Single, &all);
        assert!(second.is_empty());
        let third = next_selection(&second, &c, SelectionMode::Single, &all);
        assert_eq!(third, vec!["a"]);
    }

    #[test]
    fn single_mode_replaces_a_different_selection() {
        let a = cell("a", date(2025, 1, 1), CellStatus::Available);
        let b = cell("b", date(2025, 1, 2), CellStatus::Available);
        let all = vec![a.clone(), b.clone()];
        let next = next_selection(&["a".to_string()], &b, SelectionMode::Single, &all);
        assert_eq!(next, vec!["b"]);
    }

    #[test]
    fn multiple_mode_selection_matches_odd_click_parity() {
        let all: Vec<CalendarCell> = (0..4)
            .map(|i| cell(&format!("c{i}"), date(2025, 1, 1 + i), CellStatus::Available))
            .collect();
        // c0 twice, c1 once, c2 three times, c3 never.
        let clicks = [0usize, 1, 0, 2, 2, 2];
        let mut selection: Vec<String> = vec![];
        for &i in &clicks {
            selection = next_selection(&selection, &all[i], SelectionMode::Multiple, &all);
        }
        assert_eq!(selection, vec!["c1", "c2"]);
    }

    #[test]
    fn multiple_mode_preserves_order_and_appends() {
        let a = cell("a", date(2025, 1, 1), CellStatus::Available);
        let b = cell("b", date(2025, 1, 2), CellStatus::Available);
        let c = cell("c", date(2025, 1, 3), CellStatus::Available);
        let all = vec![a.clone(), b.clone(), c.clone()];
        let mut sel = next_selection(&[], &b, SelectionMode::Multiple, &all);
        sel = next_selection(&sel, &a, SelectionMode::Multiple, &all);
        sel = next_selection(&sel, &c, SelectionMode::Multiple, &all);
        assert_eq!(sel, vec!["b", "a", "c"]);
        sel = next_selection(&sel, &a, SelectionMode::Multiple, &all);
        assert_eq!(sel, vec!["b", "c"]);
    }

    #[test]
    fn range_mode_includes_every_cell_between_endpoints() {
        let all = vec![
            cell("d1", date(2025, 1, 1), CellStatus::Available),
            cell("d2", date(2025, 1, 2), CellStatus::Available),
            cell("d3", date(2025, 1, 3), CellStatus::Available),
        ];
        let forward = {
            let first = next_selection(&[], &all[0], SelectionMode::Range, &all);
            next_selection(&first, &all[2], SelectionMode::Range, &all)
        };
        assert_eq!(forward, vec!["d1", "d2", "d3"]);
        // Clicking the endpoints in the other order selects the same set.
        let backward = {
            let first = next_selection(&[], &all[2], SelectionMode::Range, &all);
            next_selection(&first, &all[0], SelectionMode::Range, &all)
        };
        assert_eq!(backward, vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn range_mode_result_follows_cell_list_order() {
        // Unsorted input: the result keeps list order, not date order.
        let all = vec![
            cell("d3", date(2025, 1, 3), CellStatus::Available),
            cell("d1", date(2025, 1, 1), CellStatus::Available),
            cell("d2", date(2025, 1, 2), CellStatus::Available),
        ];
        let first = next_selection(&[], &all[1], SelectionMode::Range, &all);
        let sel = next_selection(&first, &all[0], SelectionMode::Range, &all);
        assert_eq!(sel, vec!["d3", "d1", "d2"]);
    }

    #[test]
    fn range_mode_restarts_after_a_committed_range() {
        let all = vec![
            cell("d1", date(2025, 1, 1), CellStatus::Available),
            cell("d2", date(2025, 1, 2), CellStatus::Available),
            cell("d3", date(2025, 1, 3), CellStatus::Available),
        ];
        let committed = vec!["d1".to_string(), "d2".to_string(), "d3".to_string()];
        let sel = next_selection(&committed, &all[1], SelectionMode::Range, &all);
        assert_eq!(sel, vec!["d2"]);
    }

    #[test]
    fn range_mode_falls_back_when_the_anchor_is_stale() {
        let all = vec![cell("b", date(2025, 1, 2), CellStatus::Available)];
        let sel = next_selection(&["gone".to_string()], &all[0], SelectionMode::Range, &all);
        assert_eq!(sel, vec!["b"]);
    }

    #[test]
    fn range_scenario_with_an_ineligible_cell_in_between() {
        let all = vec![
            cell("a", date(2025, 1, 1), CellStatus::Available),
            cell("b", date(2025, 1, 2), CellStatus::Available),
            cell("c", date(2025, 1, 3), CellStatus::Blocked),
        ];
        let mut selection: Vec<String> = vec![];
        // The eligibility gate lives at the call site, exactly as the
        // component applies it before invoking the transition.
        for clicked in [&all[0], &all[2], &all[1]] {
            if !clicked.status.is_selectable() {
                continue;
            }
            selection = next_selection(&selection, clicked, SelectionMode::Range, &all);
        }
        // 'c' was rejected, so 'b' extends the one-member range [a, b].
        assert_eq!(selection, vec!["a", "b"]);
    }
}
