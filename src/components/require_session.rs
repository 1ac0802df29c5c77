//! Session Gate
//!
//! Resolves the session once per page mount. Without a token the page
//! redirects to login and never renders (or fetches).

use leptos::prelude::*;

use crate::config::use_config;
use crate::dom;
use crate::session::{self, BrowserStorage};

#[component]
pub fn RequireSession(children: Children) -> impl IntoView {
    let config = use_config();

    match session::resolve(&BrowserStorage::new(&config.token_key), &config) {
        Ok(client) => {
            provide_context(client);
            children().into_any()
        }
        Err(err) => {
            log::info!("[SESSION] {}; redirecting", err);
            dom::redirect(&config.login_path);
            view! { <p class="redirect-note">"Redirecting to login..."</p> }.into_any()
        }
    }
}
