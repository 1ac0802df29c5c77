//! Slugs Page
//!
//! Slug table with add and delete modals.

mod slug_form;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{ConfirmDeleteDialog, EmptyRow, LoadingRow, Modal, ModalSize, PageHeader};
use crate::config::use_config;
use crate::context::use_app_context;
use crate::dom;
use crate::listing::{Keyed, ListView};
use crate::modal_state::ActiveModal;
use crate::models::Slug;
use crate::notify::use_notifier;
use crate::store::{log_merge, use_admin_store, AdminStateStoreFields};

use slug_form::AddSlugForm;

const COLUMNS: u32 = 3;

#[component]
pub fn SlugsPage() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let store = use_admin_store();
    let display_delay_ms = use_config().display_delay_ms;
    let client = StoredValue::new(expect_context::<ApiClient>());
    let active = RwSignal::new(ActiveModal::<Slug>::Closed);

    // Load slugs on mount and after every mutation
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[SLUGS] loading, trigger={}", trigger);
        store.slugs().write().begin_load();
        let client = client.get_value();
        spawn_local(async move {
            match client.list_slugs().await {
                Ok(slugs) => {
                    TimeoutFuture::new(display_delay_ms).await;
                    let rows = slugs.len();
                    let summary = store.slugs().write().settle(slugs);
                    log_merge("slugs", summary, rows);
                }
                Err(err) => {
                    log::error!("[SLUGS] fetch failed: {}", err);
                    notifier.error("Data not found");
                    store.slugs().write().fail();
                }
            }
        });
    });

    Effect::new(move |_| dom::set_body_scroll_locked(active.with(ActiveModal::locks_scroll)));
    on_cleanup(|| dom::set_body_scroll_locked(false));

    let delete_slug = move |slug: Slug| {
        let client = client.get_value();
        spawn_local(async move {
            match client.delete_slug(slug.key()).await {
                Ok(()) => {
                    notifier.success("Slug deleted successfully");
                    ctx.reload();
                }
                Err(err) if err.is_rejection() => notifier.error("Failed to delete slug"),
                Err(err) => {
                    log::error!("[SLUGS] delete {} failed: {}", slug.key(), err);
                    notifier.error("Error occurred while deleting slug");
                }
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let candidate = active.write().confirm_delete();
        if let Some(slug) = candidate {
            delete_slug(slug);
        }
    };

    let close = Callback::new(move |_: ()| active.set(ActiveModal::Closed));
    let list_view = Memo::new(move |_| store.slugs().read().list_view());

    view! {
        <div class="page">
            <PageHeader title="Manage Slugs" />

            <div class="page-toolbar">
                <button class="btn btn-primary" on:click=move |_| active.set(ActiveModal::Add)>
                    "+ Add Slug"
                </button>
            </div>

            <div class="table-card">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Slug Name"</th>
                            <th>"Slug URL"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match list_view.get() {
                            ListView::Loading => view! { <LoadingRow colspan=COLUMNS /> }.into_any(),
                            ListView::Empty => view! {
                                <EmptyRow colspan=COLUMNS message="No slug data found." />
                            }.into_any(),
                            ListView::Rows => view! {
                                <For
                                    each=move || store.slugs().read().items.clone()
                                    key=|slug| slug.key().to_string()
                                    children=move |slug| {
                                        let name = slug.slug_name.clone();
                                        let path = format!("/{}", slug.slug.trim_start_matches('/'));
                                        view! {
                                            <tr class="table-row">
                                                <td class="cell">{name}</td>
                                                <td class="cell cell-mono">{path}</td>
                                                <td class="cell row-actions">
                                                    <button
                                                        class="row-action action-delete"
                                                        title="Delete"
                                                        on:click=move |_| active.set(ActiveModal::ConfirmDelete(slug.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            }.into_any(),
                        }}
                    </tbody>
                </table>
            </div>

            <Modal open=Signal::derive(move || active.with(ActiveModal::is_add)) on_close=close>
                <AddSlugForm on_close=close />
            </Modal>

            <Modal
                open=Signal::derive(move || active.with(|m| m.delete_candidate().is_some()))
                on_close=close
                size=ModalSize::Small
            >
                <ConfirmDeleteDialog noun="slug" on_cancel=close on_confirm=confirm_delete />
            </Modal>
        </div>
    }
}
