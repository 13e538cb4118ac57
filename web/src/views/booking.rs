use chrono::{Datelike, Local, NaiveDate, Weekday};
use leptos::prelude::*;
use leptos::task::spawn_local;

use shared_types::{calendar, format, CalendarCell, CellStatus, LegendItem, SelectionMode, ViewMode};

use crate::components::{
    ErrorView, LoadingView, SelectionActionBar, SkeletonLoader, SlotCalendar, StatusBadge,
    SuccessView,
};

const MAX_SLOTS_PER_REQUEST: usize = 8;

/// Demo booking page. Owns all calendar state (the component is controlled)
/// and walks skeleton → calendar → success around a simulated submit.
#[component]
pub fn BookingView() -> impl IntoView {
    let anchor_date = RwSignal::new(Local::now().date_naive());
    let view_mode = RwSignal::new(ViewMode::Month);
    let selection_mode = RwSignal::new(SelectionMode::Range);
    let cells = RwSignal::new(Vec::<CalendarCell>::new());
    let selected_ids = RwSignal::new(Vec::<String>::new());
    let is_loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let confirmed = RwSignal::new(None::<usize>);

    // id → cell lookup for the selection summary, rebuilt when cells change.
    let cell_lookup = Memo::new(move |_| calendar::cell_index(&cells.get()));

    // Availability fixture, standing in for the backend fetch. Reruns on
    // every anchor change and regenerates the anchor's month; generation is
    // deterministic, so same-month moves rebuild identical cells.
    Effect::new(move |_| {
        let anchor = anchor_date.get();
        cells.set(sample_cells(anchor));
        is_loading.set(false);
    });

    let handle_cell_click = move |cell: CalendarCell| {
        leptos::logging::log!("slot activated: {} on {}", cell.id, cell.date);
    };

    let handle_selection_change = move |ids: Vec<String>| {
        selected_ids.set(ids);
    };

    let set_selection_mode = move |mode: SelectionMode| {
        // Changing the discipline mid-selection would leave a set the new
        // mode could never have produced, so start over.
        selection_mode.set(mode);
        selected_ids.set(vec![]);
    };

    let handle_clear = move || {
        selected_ids.set(vec![]);
        error.set(None);
    };

    let handle_confirm = move |ids: Vec<String>| {
        error.set(None);
        if ids.len() > MAX_SLOTS_PER_REQUEST {
            error.set(Some(format!(
                "You can request at most {} slots at once.",
                MAX_SLOTS_PER_REQUEST
            )));
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            // No backend wired up in this demo: the request resolves
            // immediately.
            confirmed.set(Some(ids.len()));
            selected_ids.set(vec![]);
            submitting.set(false);
        });
    };

    let legend = vec![
        LegendItem {
            status: CellStatus::Available,
            label: "Available".to_string(),
            color: "#7bc47f".to_string(),
        },
        LegendItem {
            status: CellStatus::Partial,
            label: "Partially booked".to_string(),
            color: "#f7d070".to_string(),
        },
        LegendItem {
            status: CellStatus::Blocked,
            label: "Blocked".to_string(),
            color: "#e66a6a".to_string(),
        },
        LegendItem {
            status: CellStatus::Unavailable,
            label: "Unavailable".to_string(),
            color: "#d3d3d3".to_string(),
        },
    ];

    view! {
        <div class="booking-view">
            <div class="booking-header">
                <h1>"Book your slots"</h1>
                <div class="selection-mode-switcher">
                    {[
                        (SelectionMode::Single, "Single"),
                        (SelectionMode::Multiple, "Multiple"),
                        (SelectionMode::Range, "Range"),
                    ]
                        .into_iter()
                        .map(|(mode, label)| {
                            view! {
                                <button
                                    class="selection-mode-button"
                                    class:active=move || selection_mode.get() == mode
                                    on:click=move |_| set_selection_mode(mode)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || error.get().map(|message| view! { <ErrorView message=Some(message)/> })}

            <Show when=move || submitting.get()>
                <LoadingView message="Submitting your request..."/>
            </Show>

            {move || {
                if let Some(count) = confirmed.get() {
                    let noun = if count == 1 { "slot" } else { "slots" };
                    view! {
                        <SuccessView
                            title="Request submitted!"
                            message=format!("Your request for {} {} has been sent.", count, noun)
                            reference=format!("REQ-{}", Local::now().format("%Y%m%d"))
                            on_dismiss=move || confirmed.set(None)
                            dismiss_label="Book more slots"
                        />
                    }
                    .into_any()
                } else if is_loading.get() {
                    view! { <SkeletonLoader rows=5/> }.into_any()
                } else {
                    view! {
                        <SlotCalendar
                            cells=cells
                            anchor_date=anchor_date
                            view_mode=view_mode
                            selection_mode=selection_mode
                            selected_ids=selected_ids
                            on_cell_click=handle_cell_click
                            on_selection_change=handle_selection_change
                            legend=legend.clone()
                        />
                    }
                    .into_any()
                }
            }}

            <Show when=move || !selected_ids.get().is_empty()>
                <div class="selection-summary">
                    <h3>"Selected slots"</h3>
                    <div class="selection-summary-list">
                        {move || {
                            let lookup = cell_lookup.get();
                            selected_ids
                                .get()
                                .into_iter()
                                .filter_map(|id| lookup.get(&id).cloned())
                                .map(|cell| {
                                    let date_label = format!(
                                        "{} {}",
                                        format::month_abbrev(cell.date.month()),
                                        cell.date.day()
                                    );
                                    view! {
                                        <div class="selection-summary-item">
                                            <span class="summary-date">{date_label}</span>
                                            {cell.label.clone().map(|label| view! {
                                                <span class="summary-hour">{label}</span>
                                            })}
                                            <StatusBadge status=cell.status/>
                                            {cell.price.clone().map(|price| view! {
                                                <span class="summary-price">{price}</span>
                                            })}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>

            <SelectionActionBar
                selected_ids=selected_ids
                on_clear=handle_clear
                on_confirm=handle_confirm
            />
        </div>
    }
}

/// One month of demo availability: weekends blocked, Wednesdays partially
/// booked, every ninth day unavailable, hour slots on bookable days.
fn sample_cells(anchor: NaiveDate) -> Vec<CalendarCell> {
    let mut cells = Vec::new();
    let mut day = anchor.with_day(1).unwrap_or(anchor);
    let month = day.month();

    while day.month() == month {
        let status = match day.weekday() {
            Weekday::Sat | Weekday::Sun => CellStatus::Blocked,
            Weekday::Wed => CellStatus::Partial,
            _ if day.day() % 9 == 0 => CellStatus::Unavailable,
            _ => CellStatus::Available,
        };
        let price = matches!(status, CellStatus::Available | CellStatus::Partial)
            .then(|| format!("${}", 40 + (day.day() % 3) * 10));

        cells.push(CalendarCell {
            id: format!("slot-{day}"),
            date: day,
            status,
            label: None,
            price,
        });

        if matches!(status, CellStatus::Available | CellStatus::Partial) {
            for hour in [9u32, 10, 11, 13, 14, 15, 16] {
                let hour_status = if status == CellStatus::Partial && hour < 12 {
                    CellStatus::Unavailable
                } else {
                    CellStatus::Available
                };
                cells.push(CalendarCell {
                    id: format!("slot-{day}-{:02}", hour),
                    date: day,
                    status: hour_status,
                    label: Some(format::hour_label(hour)),
                    price: (hour_status == CellStatus::Available).then(|| "$40".to_string()),
                });
            }
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    cells
}
