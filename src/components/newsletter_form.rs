//! Footer newsletter signup. There is no backend for it yet: the address is
//! logged and the visitor gets a thank-you in the success banner for a few
//! seconds. The submit button stays locked afterwards.

use leptos::prelude::*;

use crate::components::processing_form::{SubmitButton, SubmitLock};
use crate::state::ui::UiState;

pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";
#[cfg(feature = "hydrate")]
const THANKS_VISIBLE_MS: u32 = 3_000;

#[component]
pub fn NewsletterForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let email = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);
    SubmitLock(submitted.into()).provide();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        leptos::logging::log!("Newsletter subscription: {address}");
        email.set(String::new());
        submitted.set(true);
        ui.update(|u| u.show_success(SUBSCRIBED_MESSAGE));

        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(THANKS_VISIBLE_MS, move || {
            let _ = ui.try_update(|u| u.dismiss_success(SUBSCRIBED_MESSAGE));
        })
        .forget();
    };

    view! {
        <form id="newsletterForm" class="newsletter-form" on:submit=on_submit>
            <div class="input-group">
                <input
                    type="email"
                    class="form-control"
                    placeholder="Your email address"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <SubmitButton label="Subscribe" class="btn btn-primary"/>
            </div>
        </form>
    }
}
