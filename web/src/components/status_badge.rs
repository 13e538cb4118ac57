use leptos::prelude::*;

use shared_types::CellStatus;

/// Small colored pill for an availability status. The default text can be
/// overridden when the caller has something more specific to say.
#[component]
pub fn StatusBadge(
    status: CellStatus,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let text = label.unwrap_or_else(|| default_label(status).to_string());

    view! {
        <span class=format!("status-badge {}", status.as_class())>{text}</span>
    }
}

fn default_label(status: CellStatus) -> &'static str {
    match status {
        CellStatus::Available => "Available",
        CellStatus::Unavailable => "Unavailable",
        CellStatus::Selected => "Selected",
        CellStatus::Partial => "Partially booked",
        CellStatus::Blocked => "Blocked",
    }
}
