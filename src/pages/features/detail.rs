//! Feature Detail View
//!
//! Fetches one feature's full record for the detail modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::Feature;
use crate::notify::use_notifier;

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    Loaded(Feature),
    Failed,
}

#[component]
pub fn FeatureDetail(feature_id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let notifier = use_notifier();
    let client = use_context::<ApiClient>();
    let state = RwSignal::new(DetailState::Loading);

    Effect::new(move |_| {
        let Some(client) = client.clone() else {
            notifier.info("Token not found.");
            state.set(DetailState::Failed);
            return;
        };
        let feature_id = feature_id.clone();
        spawn_local(async move {
            match client.get_feature(&feature_id).await {
                Ok(feature) => state.set(DetailState::Loaded(feature)),
                Err(err) => {
                    notifier.failure("Failed to load feature.", "Failed to load feature.", &err);
                    state.set(DetailState::Failed);
                }
            }
        });
    });

    view! {
        <div class="detail-view">
            <h2 class="form-title">"Feature Detail"</h2>
            {move || match state.get() {
                DetailState::Loading => view! { <p class="detail-note">"Loading..."</p> }.into_any(),
                DetailState::Failed => view! {
                    <p class="detail-note detail-error">"Feature could not be loaded."</p>
                }.into_any(),
                DetailState::Loaded(feature) => {
                    let status_class = feature.status_class();
                    let status = feature.status_label();
                    view! {
                        <dl class="detail-list">
                            <dt>"ID"</dt>
                            <dd>{feature.feature_id}</dd>
                            <dt>"Name"</dt>
                            <dd>{feature.name}</dd>
                            <dt>"Description"</dt>
                            <dd>{feature.description}</dd>
                            <dt>"Status"</dt>
                            <dd class=status_class>{status}</dd>
                        </dl>
                    }.into_any()
                }
            }}
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
