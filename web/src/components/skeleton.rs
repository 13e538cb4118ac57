use leptos::prelude::*;

/// Pulse-block placeholder shown while calendar data loads.
#[component]
pub fn SkeletonLoader(#[prop(default = 4)] rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton-loader" aria-busy="true">
            {(0..rows)
                .map(|_| {
                    view! {
                        <div class="skeleton-row">
                            <div class="skeleton-block wide"></div>
                            <div class="skeleton-block"></div>
                            <div class="skeleton-block"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
