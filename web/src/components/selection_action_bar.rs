use leptos::prelude::*;
use thaw::*;

/// Action bar shown while a selection exists: slot count, clear, confirm.
/// The selection itself stays with the owner; this component only reads it.
#[component]
pub fn SelectionActionBar(
    selected_ids: RwSignal<Vec<String>>,
    on_clear: impl Fn() + 'static + Copy + Send + Sync,
    on_confirm: impl Fn(Vec<String>) + 'static + Copy + Send + Sync,
    #[prop(default = "Request booking".to_string(), into)] confirm_label: String,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label);
    view! {
        <Show when=move || !selected_ids.get().is_empty()>
            <div class="selection-action-bar">
                <span class="selection-count">
                    {move || {
                        let count = selected_ids.get().len();
                        if count == 1 {
                            "1 slot selected".to_string()
                        } else {
                            format!("{} slots selected", count)
                        }
                    }}
                </span>
                <div class="selection-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_clear()
                    >
                        "Clear"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm(selected_ids.get())
                    >
                        {move || confirm_label.get_value()}
                    </Button>
                </div>
            </div>
        </Show>
    }
}
