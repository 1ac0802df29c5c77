//! Placeholder Table Rows
//!
//! Spinner and "no data" rows shared by the list pages.

use leptos::prelude::*;

#[component]
pub fn LoadingRow(colspan: u32) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="cell cell-center">
                <div class="loading-row">
                    <div class="spinner"></div>
                    <span>"Loading... Please wait"</span>
                </div>
            </td>
        </tr>
    }
}

#[component]
pub fn EmptyRow(colspan: u32, message: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="cell cell-center cell-muted">{message}</td>
        </tr>
    }
}
