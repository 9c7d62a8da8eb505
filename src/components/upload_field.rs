//! File picker for a tool's upload form.
//!
//! Every selection change is validated against the tool's accepted media
//! types and the configured size ceiling. Problems go to the error banner and
//! flip `valid` so the enclosing `ProcessingForm` refuses to submit.

#[cfg(test)]
#[path = "upload_field_test.rs"]
mod upload_field_test;

use leptos::prelude::*;

use crate::state::search::UploadSpec;
use crate::state::ui::UiState;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::upload::UploadCheck;

/// Value for the input's `accept` attribute.
fn accept_attr(upload: &UploadSpec) -> String {
    upload.accept.join(",")
}

/// Push a validation outcome into the banner. Returns whether the selection may be submitted.
#[cfg(any(test, feature = "hydrate"))]
fn report_check(ui: &mut UiState, check: &UploadCheck) -> bool {
    if check.is_ok() {
        ui.clear_banner();
        true
    } else {
        ui.show_error(&check.errors.join(" "));
        false
    }
}

#[component]
pub fn UploadField(upload: UploadSpec, valid: RwSignal<bool>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    let on_change = {
        let max_bytes = expect_context::<crate::config::ClientConfig>().max_upload_bytes;
        move |ev: leptos::ev::Event| {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let files = crate::util::upload::files_from_input(&input);
            let check = crate::util::upload::validate_upload_with_limit(files, upload.accept, max_bytes);
            let ok = ui.try_update(|ui| report_check(ui, &check)).unwrap_or(false);
            valid.set(ok);
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_change = move |_ev: leptos::ev::Event| {
        let _ = (ui, valid);
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for="fileInput">
                {if upload.multiple { "Choose files" } else { "Choose a file" }}
            </label>
            <input
                id="fileInput"
                class="form-control"
                type="file"
                name=upload.field
                accept=accept_attr(&upload)
                multiple=upload.multiple
                required=true
                on:change=on_change
            />
        </div>
    }
}
