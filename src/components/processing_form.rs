//! Submit-button lock shared by every form on the site.
//!
//! DESIGN
//! ======
//! `SubmitButton` reads the nearest `SubmitLock` from context. While the lock
//! is set the button is disabled and shows a spinner with "Processing...".
//!
//! - `ProcessingForm` posts natively; its lock is set on submit and never
//!   cleared, and the page loading indicator is shown while the browser waits
//!   for the backend's response.
//! - The login and reset dialogs lock on their `busy` flags, so the button
//!   comes back once a failed request settles.
//! - Forms that set a lock and never clear it keep the button locked for the
//!   rest of the page's life.

#[cfg(test)]
#[path = "processing_form_test.rs"]
mod processing_form_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

pub const PROCESSING_LABEL: &str = "Processing...";
const DEFAULT_BUTTON_CLASS: &str = "btn btn-primary btn-lg";

/// Whether submit buttons below this point are locked.
#[derive(Clone, Copy)]
pub struct SubmitLock(pub Signal<bool>);

impl SubmitLock {
    /// Lock driven by a flag in `UiState`.
    pub fn from_ui(ui: RwSignal<UiState>, busy: fn(&UiState) -> bool) -> Self {
        Self(Signal::derive(move || ui.with(busy)))
    }

    /// Make this lock the one seen by descendant `SubmitButton`s.
    pub fn provide(self) {
        provide_context(self);
    }
}

/// The lock in scope; unlocked when no form provided one.
fn current_lock() -> Signal<bool> {
    use_context::<SubmitLock>().map_or_else(|| Signal::stored(false), |lock| lock.0)
}

/// Handle a native submit. Returns whether the browser should go ahead.
///
/// The first submit that passes the gate sets `processing` and shows the page
/// loading indicator; later submits and gated ones are refused.
fn accept_submit(processing: RwSignal<bool>, ui: Option<RwSignal<UiState>>, can_submit: bool) -> bool {
    if processing.get_untracked() || !can_submit {
        return false;
    }
    processing.set(true);
    if let Some(ui) = ui {
        ui.update(|u| u.set_loading(true, None));
    }
    true
}

#[component]
pub fn ProcessingForm(
    #[prop(into)] action: String,
    #[prop(optional, into)] enctype: Option<String>,
    /// Submission is blocked (and the button stays live) while this is false.
    #[prop(optional, into)]
    can_submit: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let processing = RwSignal::new(false);
    let ui = use_context::<RwSignal<UiState>>();
    SubmitLock(processing.into()).provide();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let allowed = can_submit.map_or(true, |gate| gate.get_untracked());
        if !accept_submit(processing, ui, allowed) {
            ev.prevent_default();
        }
    };

    view! {
        <form action=action method="post" enctype=enctype on:submit=on_submit>
            {children()}
        </form>
    }
}

#[component]
pub fn SubmitButton(#[prop(into)] label: String, #[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let locked = current_lock();
    let class = class.unwrap_or_else(|| DEFAULT_BUTTON_CLASS.to_owned());

    view! {
        <button type="submit" class=class disabled=move || locked.get()>
            <Show when=move || locked.get() fallback=move || label.clone()>
                <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>
                {PROCESSING_LABEL}
            </Show>
        </button>
    }
}
