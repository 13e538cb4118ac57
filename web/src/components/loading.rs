use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Centered spinner shown while a booking request is in flight. For the
/// initial calendar load prefer [`SkeletonLoader`], which keeps the grid's
/// footprint.
///
/// [`SkeletonLoader`]: crate::components::SkeletonLoader
#[component]
pub fn LoadingView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-view">
            <Spinner size=SpinnerSize::Large/>
            <p class="loading-view-message">
                {message.unwrap_or_else(|| "Loading availability...".to_string())}
            </p>
        </div>
    }
}
