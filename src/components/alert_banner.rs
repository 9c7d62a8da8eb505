//! Page-level error/success banner.
//!
//! Renders into `#error-container` and `#success-container`. Only one is
//! filled at a time.

#[cfg(test)]
#[path = "alert_banner_test.rs"]
mod alert_banner_test;

use leptos::prelude::*;

use crate::state::ui::{Banner, UiState};
use crate::util::scroll::{ScrollBlock, scroll_to_id};

pub const ERROR_CONTAINER_ID: &str = "error-container";
pub const SUCCESS_CONTAINER_ID: &str = "success-container";

/// Container id, alert class, and text for a visible banner.
fn banner_parts(banner: &Banner) -> Option<(&'static str, &'static str, &str)> {
    match banner {
        Banner::Hidden => None,
        Banner::Error(message) => Some((ERROR_CONTAINER_ID, "alert alert-danger", message)),
        Banner::Success(message) => Some((SUCCESS_CONTAINER_ID, "alert alert-success", message)),
    }
}

#[component]
pub fn AlertBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let banner = Memo::new(move |_| ui.get().banner);

    // Bring a newly shown banner into view.
    Effect::new(move || {
        if let Some((container, _, _)) = banner_parts(&banner.get()) {
            scroll_to_id(container, ScrollBlock::Center);
        }
    });

    let alert_in = move |container: &'static str| {
        move || {
            let current = banner.get();
            banner_parts(&current)
                .filter(|(id, _, _)| *id == container)
                .map(|(_, class, message)| {
                    let message = message.to_owned();
                    view! { <div class=class role="alert">{message}</div> }
                })
        }
    };

    view! {
        <div id=ERROR_CONTAINER_ID>{alert_in(ERROR_CONTAINER_ID)}</div>
        <div id=SUCCESS_CONTAINER_ID>{alert_in(SUCCESS_CONTAINER_ID)}</div>
    }
}
