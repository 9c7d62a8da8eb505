//! Tool search box with debounced filtering over the static catalogue.
//!
//! Results stay empty until the first search fires; after that the list is
//! replaced wholesale on every debounced keystroke.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::ClientConfig;
use crate::state::search::{NO_TOOLS_FOUND, ToolDescriptor, filter_tools};
use crate::util::debounce::Debouncer;

#[component]
pub fn ToolSearch() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let results = RwSignal::new(None::<Vec<&'static ToolDescriptor>>);
    let debouncer = StoredValue::new(Debouncer::new(config.search_debounce_ms));

    let on_input = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        debouncer.with_value(|d| d.schedule(move || results.set(Some(filter_tools(&query)))));
    };
    on_cleanup(move || {
        let _ = debouncer.try_with_value(Debouncer::cancel);
    });

    view! {
        <div class="tool-search">
            <input
                id="searchTools"
                class="form-control form-control-lg"
                type="search"
                placeholder="Search tools..."
                autocomplete="off"
                on:input=on_input
            />
            <div id="searchResults" class="list-group mt-2">
                {move || match results.get() {
                    None => ().into_any(),
                    Some(found) if found.is_empty() => view! { <div class="p-3">{NO_TOOLS_FOUND}</div> }.into_any(),
                    Some(found) => found.into_iter().map(|tool| view! { <ToolResultRow tool=tool/> }).collect_view().into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ToolResultRow(tool: &'static ToolDescriptor) -> impl IntoView {
    view! {
        <a href=tool.url class="list-group-item list-group-item-action">
            <div class="d-flex w-100 justify-content-between">
                <h6 class="mb-1">{tool.name}</h6>
                <small class="text-muted">{tool.category}</small>
            </div>
        </a>
    }
}
