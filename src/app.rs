//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_banner::AlertBanner;
use crate::components::forgot_password_modal::ForgotPasswordModal;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::login_modal::LoginModal;
use crate::components::nav_auth::NavAuth;
use crate::components::shell_fragment::ShellFragment;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, tool::ToolPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::{auth::restore_session, scroll::install_anchor_smooth_scroll};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, auth and UI state to every page, restores a stored
/// session once on load, and lays out the shared page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_document();
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(ui);

    let header_url = config.header_fragment.clone();
    let footer_url = config.footer_fragment.clone();
    let startup = StoredValue::new(config);

    // Effects only run in the browser.
    Effect::new(move || {
        startup.with_value(|config| restore_session(auth, config));
        install_anchor_smooth_scroll();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pdf-tools.css"/>
        <Title text="PDF Tools"/>

        <ShellFragment url=header_url target_id="header"/>
        <nav class="navbar navbar-expand-lg border-bottom">
            <div class="container">
                <a class="navbar-brand" href="/">"PDF Tools"</a>
                <NavAuth/>
            </div>
        </nav>
        <AlertBanner/>
        <LoadingIndicator/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("tools"), ParamSegment("page")) view=ToolPage/>
                </Routes>
            </main>
        </Router>

        <ShellFragment url=footer_url target_id="footer"/>
        <LoginModal/>
        <ForgotPasswordModal/>
    }
}
