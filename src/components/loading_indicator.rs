//! Busy indicator driven by `UiState::loading`.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let text = move || ui.get().loading;

    view! {
        <div
            id="loading-indicator"
            class=move || if text().is_some() { "loading-indicator text-center my-3" } else { "loading-indicator text-center my-3 d-none" }
        >
            <div class="spinner-border text-primary" role="status"></div>
            <p class="mt-2">{move || text().unwrap_or_default()}</p>
        </div>
    }
}
