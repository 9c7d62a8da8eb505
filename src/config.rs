//! Typed client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend contract (endpoint paths, fragment locations, storage key) is
//! fixed by the site, but the API may live behind a path prefix. The value is
//! built once in `App` and shared through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PROFILE_PATH: &str = "/api/user/profile";
pub const DEFAULT_LOGIN_PATH: &str = "/api/login";
pub const DEFAULT_FORGOT_PASSWORD_PATH: &str = "/api/forgot-password";
pub const DEFAULT_LOGOUT_PATH: &str = "/api/logout";
pub const DEFAULT_HEADER_FRAGMENT: &str = "/components/header.html";
pub const DEFAULT_FOOTER_FRAGMENT: &str = "/components/footer.html";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Name of the `<meta>` tag that may carry an API path prefix.
pub const API_BASE_META: &str = "api-base";

/// Backend endpoint paths consumed by the account controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub profile: String,
    pub login: String,
    pub forgot_password: String,
    pub logout: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE_PATH.to_owned(),
            login: DEFAULT_LOGIN_PATH.to_owned(),
            forgot_password: DEFAULT_FORGOT_PASSWORD_PATH.to_owned(),
            logout: DEFAULT_LOGOUT_PATH.to_owned(),
        }
    }
}

/// Client configuration shared through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: ApiEndpoints,
    pub header_fragment: String,
    pub footer_fragment: String,
    pub token_key: String,
    pub search_debounce_ms: u32,
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: ApiEndpoints::default(),
            header_fragment: DEFAULT_HEADER_FRAGMENT.to_owned(),
            footer_fragment: DEFAULT_FOOTER_FRAGMENT.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ClientConfig {
    /// Prefix every API endpoint with `base`. Blank input leaves paths unchanged.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = normalize_base(base);
        if base.is_empty() {
            return self;
        }
        self.endpoints = ApiEndpoints {
            profile: format!("{base}{DEFAULT_PROFILE_PATH}"),
            login: format!("{base}{DEFAULT_LOGIN_PATH}"),
            forgot_password: format!("{base}{DEFAULT_FORGOT_PASSWORD_PATH}"),
            logout: format!("{base}{DEFAULT_LOGOUT_PATH}"),
        };
        self
    }

    /// Build config from the current document.
    ///
    /// Reads `<meta name="api-base" content="...">` when present; everything
    /// else uses defaults. Outside the browser this is `ClientConfig::default()`.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let base = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| {
                    doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
                        .ok()
                        .flatten()
                })
                .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
                .map(|meta| meta.content());
            match base {
                Some(base) => Self::default().with_api_base(&base),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') || trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
