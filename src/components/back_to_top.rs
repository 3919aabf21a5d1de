//! Floating back-to-top button, visible once the page has scrolled.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll;

#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:visible=move || ui.get().back_to_top_visible
            aria-label="Back to top"
            on:click=move |_| scroll::scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
