//! Static HTML fragment (site header/footer) injected into a placeholder.
//!
//! TRADE-OFFS
//! ==========
//! Failures are logged and otherwise silent: the page stays usable with an
//! empty placeholder rather than showing an error for decorative chrome.

use leptos::prelude::*;

#[component]
pub fn ShellFragment(#[prop(into)] url: String, target_id: &'static str) -> impl IntoView {
    let html = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_fragment(&url).await {
                Ok(body) => html.set(body),
                Err(e) => leptos::logging::warn!("Error loading {target_id}: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }

    view! { <div id=target_id inner_html=move || html.get()></div> }
}
