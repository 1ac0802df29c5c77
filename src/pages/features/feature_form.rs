//! Feature Forms
//!
//! Add and edit forms sharing one set of controlled fields.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::use_app_context;
use crate::modal_state::AfterSubmit;
use crate::models::{Feature, FeatureDraft};
use crate::notify::use_notifier;

/// What a submit does with the draft
#[derive(Clone)]
enum Target {
    Create,
    Update(String),
}

impl Target {
    fn success_message(&self) -> &'static str {
        match self {
            Target::Create => "Feature has been added.",
            Target::Update(_) => "Feature data has been updated.",
        }
    }

    fn failure_title(&self) -> &'static str {
        match self {
            Target::Create => "Failed to add feature.",
            Target::Update(_) => "Failed to update feature.",
        }
    }

    fn failure_fallback(&self) -> &'static str {
        match self {
            Target::Create => "Failed to add feature. Please try again.",
            Target::Update(_) => "Failed to update feature. Please try again.",
        }
    }
}

#[component]
pub fn AddFeatureForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <FeatureForm title="Add Feature" draft=FeatureDraft::default() target=Target::Create on_close=on_close />
    }
}

#[component]
pub fn EditFeatureForm(feature: Feature, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let draft = FeatureDraft::from(&feature);
    view! {
        <FeatureForm
            title="Edit Feature"
            draft=draft
            target=Target::Update(feature.feature_id)
            on_close=on_close
        />
    }
}

#[component]
fn FeatureForm(
    title: &'static str,
    draft: FeatureDraft,
    target: Target,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let client = use_context::<ApiClient>().map(StoredValue::new);
    let target = StoredValue::new(target);

    let draft = RwSignal::new(draft);
    let loading = RwSignal::new(false);
    let name_ref = NodeRef::<html::Input>::new();

    // Focus the name field once mounted
    Effect::new(move |_| {
        if let Some(input) = name_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(client) = client else {
            notifier.info("Token not found.");
            return;
        };
        let client = client.get_value();
        let target = target.get_value();
        let payload = draft.get();

        loading.set(true);
        spawn_local(async move {
            let outcome = match &target {
                Target::Create => client.create_feature(&payload).await,
                Target::Update(feature_id) => client.update_feature(feature_id, &payload).await,
            };
            loading.set(false);

            match AfterSubmit::from(outcome) {
                AfterSubmit::CloseAndRefetch => {
                    notifier.success(target.success_message());
                    on_close.run(());
                    ctx.reload();
                }
                AfterSubmit::StayOpen(err) => {
                    notifier.failure(target.failure_title(), target.failure_fallback(), &err)
                }
            }
        });
    };

    view! {
        <div class="entity-form">
            <h2 class="form-title">{title}</h2>
            <form class="form-body" on:submit=submit>
                <div class="form-grid">
                    <div class="form-field">
                        <label class="form-label">"Name"</label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Enter Feature Name"
                            node_ref=name_ref
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                            }
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Status"</label>
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.is_active)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| d.is_active = checked);
                                }
                            />
                            " Active"
                        </label>
                    </div>
                </div>
                <div class="form-field">
                    <label class="form-label">"Description"</label>
                    <textarea
                        class="form-input"
                        rows="3"
                        placeholder="Enter Description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    ></textarea>
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
