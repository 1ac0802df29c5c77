//! Feature Admin App
//!
//! Root component: shared context, navigation and routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{NavBar, RequireSession, ToastHost};
use crate::config::AdminConfig;
use crate::context::AppContext;
use crate::notify::Notifier;
use crate::pages::{FeaturesPage, SlugsPage};
use crate::store::AdminState;

#[component]
pub fn App() -> impl IntoView {
    let config = AdminConfig::from_build_env();
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(Notifier::new(config.toast_ttl_ms));
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(Store::new(AdminState::default()));
    provide_context(config);

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=path!("/") view=FeaturesRoute />
                        <Route path=path!("/features") view=FeaturesRoute />
                        <Route path=path!("/slugs") view=SlugsRoute />
                    </Routes>
                </main>
                <ToastHost />
            </div>
        </Router>
    }
}

#[component]
fn FeaturesRoute() -> impl IntoView {
    view! {
        <RequireSession>
            <FeaturesPage />
        </RequireSession>
    }
}

#[component]
fn SlugsRoute() -> impl IntoView {
    view! {
        <RequireSession>
            <SlugsPage />
        </RequireSession>
    }
}
