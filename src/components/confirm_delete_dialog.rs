//! Confirm Delete Dialog
//!
//! Body of the small confirmation modal shown before any delete.

use leptos::prelude::*;

/// Delete confirmation with cancel/confirm actions
///
/// # Arguments
/// * `noun` - What is being deleted, e.g. "feature"
/// * `on_cancel` - Close without deleting
/// * `on_confirm` - Perform the delete
#[component]
pub fn ConfirmDeleteDialog(
    noun: &'static str,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-dialog">
            <h2 class="confirm-title">"Confirm to Delete"</h2>
            <p class="confirm-text">{format!("Are you sure you want to delete this {}?", noun)}</p>
            <div class="confirm-actions">
                <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="button" class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
