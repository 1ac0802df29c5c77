//! Features Page
//!
//! Feature table with add/edit/detail/delete modals.

mod detail;
mod feature_form;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{ConfirmDeleteDialog, EmptyRow, LoadingRow, Modal, ModalSize, PageHeader};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::dom;
use crate::listing::ListView;
use crate::modal_state::ActiveModal;
use crate::models::Feature;
use crate::notify::use_notifier;
use crate::store::{log_merge, use_admin_store, AdminStateStoreFields};

use detail::FeatureDetail;
use feature_form::{AddFeatureForm, EditFeatureForm};

const COLUMNS: u32 = 4;

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let store = use_admin_store();
    let display_delay_ms = use_config().display_delay_ms;
    let client = StoredValue::new(expect_context::<ApiClient>());
    let active = RwSignal::new(ActiveModal::<Feature>::Closed);

    // Load features on mount and after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[FEATURES] loading, trigger={}", trigger);
        store.features().write().begin_load();
        let client = client.get_value();
        spawn_local(async move {
            match client.list_features().await {
                Ok(features) => {
                    TimeoutFuture::new(display_delay_ms).await;
                    let rows = features.len();
                    let summary = store.features().write().settle(features);
                    log_merge("features", summary, rows);
                }
                Err(err) => {
                    log::error!("[FEATURES] fetch failed: {}", err);
                    notifier.error("Data not found");
                    store.features().write().fail();
                }
            }
        });
    });

    Effect::new(move |_| dom::set_body_scroll_locked(active.with(ActiveModal::locks_scroll)));
    on_cleanup(|| dom::set_body_scroll_locked(false));

    let delete_feature = move |feature: Feature| {
        let client = client.get_value();
        spawn_local(async move {
            match client.delete_feature(&feature.feature_id).await {
                Ok(()) => {
                    notifier.success("Feature deleted successfully");
                    ctx.reload();
                }
                Err(err) if err.is_rejection() => notifier.error("Failed to delete feature"),
                Err(err) => {
                    log::error!("[FEATURES] delete {} failed: {}", feature.feature_id, err);
                    notifier.error("Error occurred while deleting feature");
                }
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let candidate = active.write().confirm_delete();
        if let Some(feature) = candidate {
            delete_feature(feature);
        }
    };

    let close = Callback::new(move |_: ()| active.set(ActiveModal::Closed));
    let list_view = Memo::new(move |_| store.features().read().list_view());

    view! {
        <div class="page">
            <PageHeader title="Manage Features" />

            <div class="page-toolbar">
                <button class="btn btn-primary" on:click=move |_| active.set(ActiveModal::Add)>
                    "+ Add Feature"
                </button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Status"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match list_view.get() {
                            ListView::Loading => view! { <LoadingRow colspan=COLUMNS /> }.into_any(),
                            ListView::Empty => view! {
                                <EmptyRow colspan=COLUMNS message="No feature data found." />
                            }.into_any(),
                            ListView::Rows => view! {
                                <For
                                    each=move || store.features().read().items.clone()
                                    key=|feature| feature.feature_id.clone()
                                    children=move |feature| view! { <FeatureRow feature=feature active=active /> }
                                />
                            }.into_any(),
                        }}
                    </tbody>
                </table>
            </div>

            <Modal open=Signal::derive(move || active.with(ActiveModal::is_add)) on_close=close>
                <AddFeatureForm on_close=close />
            </Modal>

            <Modal open=Signal::derive(move || active.with(|m| m.detail().is_some())) on_close=close>
                {move || active.with(|m| m.detail().cloned()).map(|feature| view! {
                    <FeatureDetail feature_id=feature.feature_id on_close=close />
                })}
            </Modal>

            <Modal open=Signal::derive(move || active.with(|m| m.editing().is_some())) on_close=close>
                {move || active.with(|m| m.editing().cloned()).map(|feature| view! {
                    <EditFeatureForm feature=feature on_close=close />
                })}
            </Modal>

            <Modal
                open=Signal::derive(move || active.with(|m| m.delete_candidate().is_some()))
                on_close=close
                size=ModalSize::Small
            >
                <ConfirmDeleteDialog noun="feature" on_cancel=close on_confirm=confirm_delete />
            </Modal>
        </div>
    }
}

/// One feature row with view/edit/delete actions
#[component]
fn FeatureRow(feature: Feature, active: RwSignal<ActiveModal<Feature>>) -> impl IntoView {
    let status_class = format!("cell {}", feature.status_class());
    let status = feature.status_label();
    let name = feature.name.clone();
    let description = feature.description.clone();
    let for_detail = feature.clone();
    let for_edit = feature.clone();

    view! {
        <tr class="table-row">
            <td class="cell">{name}</td>
            <td class="cell">{description}</td>
            <td class=status_class>{status}</td>
            <td class="cell row-actions">
                <button
                    class="row-action action-view"
                    title="View"
                    on:click=move |_| active.set(ActiveModal::Detail(for_detail.clone()))
                >
                    "View"
                </button>
                <button
                    class="row-action action-edit"
                    title="Edit"
                    on:click=move |_| active.set(ActiveModal::Edit(for_edit.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="row-action action-delete"
                    title="Delete"
                    on:click=move |_| active.set(ActiveModal::ConfirmDelete(feature.clone()))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
