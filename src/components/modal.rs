//! Modal Component
//!
//! Overlay gate: renders nothing while closed. Closing is the caller's job;
//! the close control only reports the request.

use leptos::prelude::*;

/// Panel width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    #[default]
    Default,
    /// Narrow panel for confirmations
    Small,
}

impl ModalSize {
    fn panel_class(self) -> &'static str {
        match self {
            ModalSize::Default => "modal-panel",
            ModalSize::Small => "modal-panel modal-panel-sm",
        }
    }
}

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] size: ModalSize,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class=size.panel_class()>
                    <button
                        type="button"
                        class="modal-close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
