//! Upload page for a single conversion tool (`/tools/:page`).
//!
//! The form posts natively as multipart to the tool's backend action; the
//! browser renders whatever the backend returns. Client-side validation only
//! gates the submit.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::processing_form::{ProcessingForm, SubmitButton};
use crate::components::upload_field::UploadField;
use crate::state::search::find_tool;

#[component]
pub fn ToolPage() -> impl IntoView {
    let params = use_params_map();
    let tool = Memo::new(move |_| params.read().get("page").as_deref().and_then(find_tool));

    move || match tool.get() {
        None => view! {
            <section class="container py-5 text-center">
                <h1 class="h3">"Tool not found"</h1>
                <a href="/" class="btn btn-link">"Back to all tools"</a>
            </section>
        }
        .into_any(),
        Some(tool) => {
            let valid = RwSignal::new(true);
            view! {
                <section class="container py-5">
                    <h1 class="h3 mb-4">{tool.name}</h1>
                    <ProcessingForm
                        action=tool.upload.action
                        enctype="multipart/form-data".to_owned()
                        can_submit=valid
                    >
                        <UploadField upload=tool.upload valid=valid/>
                        <SubmitButton label="Convert"/>
                    </ProcessingForm>
                </section>
            }
            .into_any()
        }
    }
}
