use leptos::prelude::*;
use thaw::*;

/// Confirmation panel shown after a request is accepted.
#[component]
pub fn SuccessView(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    /// Optional reference shown in its own block, e.g. a request number.
    #[prop(optional, into)] reference: Option<String>,
    on_dismiss: impl Fn() + 'static + Copy + Send + Sync,
    #[prop(default = "Done".to_string(), into)] dismiss_label: String,
) -> impl IntoView {
    view! {
        <div class="success-view">
            <div class="success-view-icon">"✓"</div>
            <h2 class="success-view-title">{title}</h2>
            <p class="success-view-message">{message}</p>

            {reference.map(|reference| view! {
                <div class="success-view-reference">
                    <p class="success-view-reference-number">{reference}</p>
                    <p class="success-view-reference-note">
                        "Save this reference for your records"
                    </p>
                </div>
            })}

            <div class="success-view-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_dismiss()
                >
                    {dismiss_label.clone()}
                </Button>
            </div>
        </div>
    }
}
