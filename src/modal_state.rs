//! Page Modal State
//!
//! Which modal a list page is showing. One variant at a time, so two
//! modals can never be open together.

use std::mem;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveModal<T> {
    Closed,
    Add,
    Edit(T),
    Detail(T),
    ConfirmDelete(T),
}

impl<T> Default for ActiveModal<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> ActiveModal<T> {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Self::Add)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Edit(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&T> {
        match self {
            Self::Detail(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn delete_candidate(&self) -> Option<&T> {
        match self {
            Self::ConfirmDelete(entity) => Some(entity),
            _ => None,
        }
    }

    /// Add and detail views lock page scrolling
    pub fn locks_scroll(&self) -> bool {
        matches!(self, Self::Add | Self::Detail(_))
    }

    /// Accept a pending delete confirmation.
    ///
    /// Closes the modal and hands back the candidate; any other state is
    /// left untouched and yields `None`.
    pub fn confirm_delete(&mut self) -> Option<T> {
        match mem::replace(self, Self::Closed) {
            Self::ConfirmDelete(entity) => Some(entity),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// How a form modal reacts once its submit settles
#[derive(Debug, Clone, PartialEq)]
pub enum AfterSubmit {
    /// Saved: close the modal and refetch the list
    CloseAndRefetch,
    /// Failed: keep the modal open with the draft intact, refetch nothing
    StayOpen(ApiError),
}

impl AfterSubmit {
    pub fn closes_modal(&self) -> bool {
        matches!(self, Self::CloseAndRefetch)
    }

    pub fn refetches(&self) -> bool {
        matches!(self, Self::CloseAndRefetch)
    }
}

impl From<Result<(), ApiError>> for AfterSubmit {
    fn from(outcome: Result<(), ApiError>) -> Self {
        match outcome {
            Ok(()) => Self::CloseAndRefetch,
            Err(err) => Self::StayOpen(err),
        }
    }
}
