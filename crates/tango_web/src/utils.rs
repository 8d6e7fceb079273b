//! Various utility functions.

use leptos::prelude::*;

/// Generic loading fallback view.
pub fn loading_fallback(text: &'static str) -> impl IntoView {
    view! { <div>{text}</div> }.into_view()
}

/// Loading fallback with localized text.
pub fn loading_fallback_with(
    text: impl Fn() -> &'static str + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="block has-text-centered">
            <progress class="progress is-small" max="100"></progress>
            <div>{move || text()}</div>
        </div>
    }
    .into_view()
}
