//! UI Components
//!
//! Reusable Leptos components.

mod confirm_delete_dialog;
mod modal;
mod nav_bar;
mod page_header;
mod require_session;
mod table_rows;
mod toast_host;

pub use confirm_delete_dialog::ConfirmDeleteDialog;
pub use modal::{Modal, ModalSize};
pub use nav_bar::NavBar;
pub use page_header::PageHeader;
pub use require_session::RequireSession;
pub use table_rows::{EmptyRow, LoadingRow};
pub use toast_host::ToastHost;
