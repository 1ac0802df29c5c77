//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::listing::{ListState, MergeSummary};
use crate::models::{Feature, Slug};

/// Client-side cache of backend collections
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Features listing (loading flag + rows)
    pub features: ListState<Feature>,
    /// Slugs listing (loading flag + rows)
    pub slugs: ListState<Slug>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

/// Log what a refetch changed
pub fn log_merge(collection: &str, summary: MergeSummary, rows: usize) {
    if summary.is_unchanged() {
        log::debug!("[STORE] {} unchanged ({} rows)", collection, rows);
    } else {
        log::debug!(
            "[STORE] {}: +{} ~{} -{} ({} rows)",
            collection,
            summary.added,
            summary.updated,
            summary.removed,
            rows
        );
    }
}
