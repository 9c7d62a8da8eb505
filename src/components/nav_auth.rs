//! Navbar account controls: login/sign-up buttons or the signed-in user menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both groups render from one `NavView` derived from the auth state, so the
//! two visibility classes always change together. Neither is shown while a
//! stored session is being restored.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::{AuthState, NavView};
use crate::state::ui::UiState;

#[component]
pub fn NavAuth() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let nav = Memo::new(move |_| NavView::from(&auth.get()));

    let on_login = move |_| ui.update(UiState::open_login);
    let on_logout = move |_| config.with_value(|c| crate::util::auth::logout(auth, c));

    view! {
        <div id="authButtons" class=move || format!("nav-auth {}", nav.get().auth_buttons_class).trim_end().to_owned()>
            <button class="btn btn-outline-primary me-2" type="button" on:click=on_login>
                "Log In"
            </button>
            <a class="btn btn-primary" href="/register.html">"Sign Up"</a>
        </div>
        <div id="userMenu" class=move || format!("nav-user align-items-center {}", nav.get().user_menu_class)>
            <i class="fas fa-user-circle me-2"></i>
            <span id="userFullName" class="me-3">{move || nav.get().display_name}</span>
            <button class="btn btn-outline-secondary btn-sm" type="button" on:click=on_logout>
                "Log Out"
            </button>
        </div>
    }
}
