//! Smooth scrolling for in-page anchors and banners.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Vertical alignment when scrolling an element into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
}

/// Element id targeted by an in-page link (`"#pricing"` -> `"pricing"`).
///
/// Returns `None` for bare `"#"` and for links that leave the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll the element with `id` into view. Missing elements are ignored.
pub fn scroll_to_id(id: &str, block: ScrollBlock) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(match block {
            ScrollBlock::Start => web_sys::ScrollLogicalPosition::Start,
            ScrollBlock::Center => web_sys::ScrollLogicalPosition::Center,
        });
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, block);
    }
}

/// Intercept clicks on `<a href="#...">` anywhere in the document and scroll
/// smoothly instead of jumping. Covers links inside injected fragments too.
pub fn install_anchor_smooth_scroll() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::window_event_listener;
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, |ev| {
            let Some(anchor) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
            else {
                return;
            };
            let href = anchor.get_attribute("href").unwrap_or_default();
            ev.prevent_default();
            if let Some(id) = anchor_target(&href) {
                scroll_to_id(id, ScrollBlock::Start);
            }
        });
        // Lives for the whole page.
        std::mem::forget(handle);
    }
}
