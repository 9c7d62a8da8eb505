//! Landing page: hero, tool search, the catalogue grouped by category, and
//! the newsletter signup.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::newsletter_form::NewsletterForm;
use crate::components::tool_search::ToolSearch;
use crate::state::search::{TOOLS, ToolDescriptor, categories};

fn tools_in(category: &str) -> impl Iterator<Item = &'static ToolDescriptor> + '_ {
    TOOLS.iter().filter(move |tool| tool.category == category)
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero text-center py-5">
            <h1 class="display-5 fw-bold">"Every PDF tool in one place"</h1>
            <p class="lead">"Convert, rotate, number and watermark your documents in seconds."</p>
            <div class="col-lg-6 mx-auto">
                <ToolSearch/>
            </div>
        </section>

        <section id="tools" class="container py-4">
            {categories()
                .into_iter()
                .map(|category| {
                    view! {
                        <h2 class="h4 mt-4">{category}</h2>
                        <div class="row g-3">
                            {tools_in(category).map(|tool| view! { <ToolCard tool=tool/> }).collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </section>

        <section id="newsletter" class="container py-5">
            <h2 class="h5">"Stay up to date"</h2>
            <NewsletterForm/>
        </section>
    }
}

#[component]
fn ToolCard(tool: &'static ToolDescriptor) -> impl IntoView {
    view! {
        <div class="col-sm-6 col-lg-4">
            <a href=tool.url class="card h-100 text-decoration-none">
                <div class="card-body">
                    <h3 class="h6 card-title">{tool.name}</h3>
                    <p class="card-text text-muted small">{tool.category}</p>
                </div>
            </a>
        </div>
    }
}
