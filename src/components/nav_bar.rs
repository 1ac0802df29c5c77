//! Navigation Bar
//!
//! Links between the admin pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Admin"</span>
            <A href="/features">"Features"</A>
            <A href="/slugs">"Slugs"</A>
        </nav>
    }
}
