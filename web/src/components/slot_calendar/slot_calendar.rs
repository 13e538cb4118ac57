use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};
use leptos::prelude::*;
use thaw::*;

use shared_types::{calendar, format, CalendarCell, CellStatus, LegendItem, SelectionMode, ViewMode};

use super::legend::CalendarLegend;

const WEEK_HEADER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Controlled availability calendar. The owner holds the selection and the
/// anchor/view signals; this component only proposes the next selection via
/// `on_selection_change` and reports activations via `on_cell_click`.
#[component]
pub fn SlotCalendar(
    /// Availability cells, supplied fresh whenever upstream data changes.
    cells: RwSignal<Vec<CalendarCell>>,
    anchor_date: RwSignal<NaiveDate>,
    view_mode: RwSignal<ViewMode>,
    selection_mode: RwSignal<SelectionMode>,
    /// Owner-held selection. Never written here.
    selected_ids: RwSignal<Vec<String>>,
    on_cell_click: impl Fn(CalendarCell) + 'static + Copy + Send + Sync,
    on_selection_change: impl Fn(Vec<String>) + 'static + Copy + Send + Sync,
    #[prop(optional)] legend: Vec<LegendItem>,
    /// Hour rows rendered in day and week views.
    #[prop(default = (9..=17).collect())]
    hours: Vec<u32>,
) -> impl IntoView {
    let today = Local::now().date_naive();

    let visible = Memo::new(move |_| calendar::visible_dates(anchor_date.get(), view_mode.get()));

    // Clickability gate: unavailable and blocked cells never reach the
    // transition function. The activation callback fires before the
    // selection change, on every eligible click.
    let handle_cell_click = move |cell: CalendarCell| {
        if !cell.status.is_selectable() {
            return;
        }
        on_cell_click(cell.clone());
        let next = calendar::next_selection(
            &selected_ids.get(),
            &cell,
            selection_mode.get(),
            &cells.get(),
        );
        on_selection_change(next);
    };

    let navigate = move |direction: i64| {
        let mode = view_mode.get();
        anchor_date.update(|anchor| {
            *anchor = match mode {
                ViewMode::Day => *anchor + Duration::days(direction),
                ViewMode::Week => *anchor + Duration::days(7 * direction),
                ViewMode::Month => shift_month(*anchor, direction as i32),
            };
        });
    };

    view! {
        <div class="slot-calendar">
            <div class="calendar-navigation">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| navigate(-1)
                >
                    "← Previous"
                </Button>

                <h2 class="current-range">
                    {move || format::range_label(anchor_date.get(), view_mode.get())}
                </h2>

                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| navigate(1)
                >
                    "Next →"
                </Button>
            </div>

            <div class="calendar-toolbar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| anchor_date.set(today)
                >
                    "Today"
                </Button>

                <div class="view-mode-switcher">
                    {[(ViewMode::Day, "Day"), (ViewMode::Week, "Week"), (ViewMode::Month, "Month")]
                        .into_iter()
                        .map(|(mode, label)| {
                            view! {
                                <button
                                    class="view-mode-button"
                                    class:active=move || view_mode.get() == mode
                                    on:click=move |_| view_mode.set(mode)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                let mode = view_mode.get();
                let anchor = anchor_date.get();
                let cell_list = cells.get();
                let selected = selected_ids.get();
                let dates = visible.get();

                match mode {
                    ViewMode::Month => {
                        let day_cells = dates
                            .into_iter()
                            .map(|date| {
                                let resolved = calendar::find_cell(&cell_list, date, None)
                                    .cloned()
                                    .unwrap_or_else(|| placeholder_cell(date, None));
                                let classes = cell_classes(
                                    &resolved,
                                    selected.contains(&resolved.id),
                                    format::is_same_day(date, today),
                                    date.month() == anchor.month(),
                                );
                                let click_cell = resolved.clone();
                                view! {
                                    <div
                                        class=classes
                                        on:click=move |_| handle_cell_click(click_cell.clone())
                                    >
                                        <span class="day-number">{date.day()}</span>
                                        {resolved.price.clone().map(|price| view! {
                                            <span class="cell-price">{price}</span>
                                        })}
                                    </div>
                                }
                                .into_any()
                            })
                            .collect::<Vec<_>>();

                        view! {
                            <div class="month-grid">
                                <div class="calendar-weekdays">
                                    {WEEK_HEADER
                                        .into_iter()
                                        .map(|weekday| view! {
                                            <div class="weekday">{format::weekday_abbrev(weekday)}</div>
                                        })
                                        .collect_view()}
                                </div>
                                <div class="calendar-days">{day_cells}</div>
                            </div>
                        }
                        .into_any()
                    }
                    _ => {
                        let header = dates
                            .iter()
                            .map(|date| {
                                view! {
                                    <div class="time-grid-day" class:today=format::is_same_day(*date, today)>
                                        {format::weekday_abbrev(date.weekday())}
                                        " "
                                        {date.day()}
                                    </div>
                                }
                            })
                            .collect_view();

                        let rows = hours
                            .iter()
                            .map(|&hour| {
                                let slots = dates
                                    .iter()
                                    .map(|&date| {
                                        let resolved = calendar::find_cell(&cell_list, date, Some(hour))
                                            .cloned()
                                            .unwrap_or_else(|| placeholder_cell(date, Some(hour)));
                                        let classes = cell_classes(
                                            &resolved,
                                            selected.contains(&resolved.id),
                                            false,
                                            true,
                                        );
                                        let label = resolved
                                            .label
                                            .clone()
                                            .unwrap_or_else(|| format::hour_label(hour));
                                        let click_cell = resolved.clone();
                                        view! {
                                            <div
                                                class=classes
                                                on:click=move |_| handle_cell_click(click_cell.clone())
                                            >
                                                <span class="slot-label">{label}</span>
                                                {resolved.price.clone().map(|price| view! {
                                                    <span class="cell-price">{price}</span>
                                                })}
                                            </div>
                                        }
                                        .into_any()
                                    })
                                    .collect::<Vec<_>>();

                                view! {
                                    <div class="time-grid-row">
                                        <div class="hour-label">{format::hour_label(hour)}</div>
                                        {slots}
                                    </div>
                                }
                            })
                            .collect_view();

                        view! {
                            <div class="time-grid">
                                <div class="time-grid-header">
                                    <div class="hour-label"></div>
                                    {header}
                                </div>
                                {rows}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            {(!legend.is_empty()).then(|| view! { <CalendarLegend items=legend.clone()/> })}
        </div>
    }
}

fn shift_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        anchor.checked_add_months(months)
    } else {
        anchor.checked_sub_months(months)
    };
    shifted.unwrap_or(anchor)
}

/// Fallback for slots with no matching cell: rendered as unavailable, with
/// the requested hour as its label. The resolver itself never synthesizes.
fn placeholder_cell(date: NaiveDate, hour: Option<u32>) -> CalendarCell {
    let id = match hour {
        Some(h) => format!("{date}-{}", format::hour_label(h)),
        None => format!("{date}-empty"),
    };
    CalendarCell {
        id,
        date,
        status: CellStatus::Unavailable,
        label: hour.map(format::hour_label),
        price: None,
    }
}

fn cell_classes(cell: &CalendarCell, is_selected: bool, is_today: bool, in_scope: bool) -> String {
    let mut classes = vec!["calendar-cell", cell.status.as_class()];
    if is_selected {
        classes.push("is-selected");
    }
    if is_today {
        classes.push("today");
    }
    if !in_scope {
        classes.push("outside-month");
    }
    classes.join(" ")
}
