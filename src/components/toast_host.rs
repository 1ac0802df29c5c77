//! Toast Host
//!
//! Renders the notifier's toast stack; click to dismiss.

use leptos::prelude::*;

use crate::notify::use_notifier;

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| notifier.dismiss(id)>
                            <div class="toast-title">{toast.title}</div>
                            {toast.detail.map(|detail| view! { <div class="toast-detail">{detail}</div> })}
                        </div>
                    }
                }
            />
        </div>
    }
}
