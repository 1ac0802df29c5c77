//! Add Slug Form
//!
//! The slug URL field is normalized on every keystroke.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_app_context;
use crate::modal_state::AfterSubmit;
use crate::models::SlugDraft;
use crate::notify::use_notifier;
use crate::slug::normalize_slug;

#[component]
pub fn AddSlugForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let client = use_context::<ApiClient>().map(StoredValue::new);

    let draft = RwSignal::new(SlugDraft::default());
    let loading = RwSignal::new(false);
    let slug_name_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = slug_name_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Must precede loading.set(true)
        let Some(client) = client else {
            notifier.info("Token not found.");
            return;
        };
        let client = client.get_value();
        let payload = draft.get();

        loading.set(true);
        spawn_local(async move {
            let outcome = client.create_slug(&payload).await;
            loading.set(false);

            match AfterSubmit::from(outcome) {
                AfterSubmit::CloseAndRefetch => {
                    notifier.success("Slug has been added.");
                    on_close.run(());
                    ctx.reload();
                }
                AfterSubmit::StayOpen(err) => {
                    notifier.failure("Failed to add slug.", "Failed to add slug. Please try again.", &err)
                }
            }
        });
    };

    view! {
        <div class="entity-form">
            <h2 class="form-title">"Add Slug"</h2>
            <form class="form-body" on:submit=submit>
                <div class="form-grid">
                    <div class="form-field">
                        <label class="form-label">"Slug Name"</label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Enter Slug Name"
                            node_ref=slug_name_ref
                            prop:value=move || draft.with(|d| d.slug_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.slug_name = value);
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Slug URL"</label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Enter Slug URL"
                            prop:value=move || draft.with(|d| d.slug.clone())
                            on:input=move |ev| {
                                let slug = normalize_slug(&event_target_value(&ev));
                                draft.update(|d| d.slug = slug);
                            }
                        />
                    </div>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {move || if loading.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
