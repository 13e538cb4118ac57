use leptos::prelude::*;

use shared_types::LegendItem;

#[component]
pub fn CalendarLegend(items: Vec<LegendItem>) -> impl IntoView {
    view! {
        <div class="calendar-legend">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="legend-item">
                            <div
                                class=format!("legend-color {}", item.status.as_class())
                                style=format!("background-color: {}", item.color)
                            ></div>
                            <span>{item.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
