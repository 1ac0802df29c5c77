//! Page Header
//!
//! Page title with today's weekday badge and date/time stamp.

use leptos::prelude::*;

use crate::dom;

#[component]
pub fn PageHeader(title: &'static str) -> impl IntoView {
    let (day, stamp) = dom::today_labels();

    view! {
        <div class="page-header">
            <h1 class="page-title">{title}</h1>
            <div class="page-date">
                <span class="day-badge">{day}</span>
                <p class="date-stamp">{stamp}</p>
            </div>
        </div>
    }
}
