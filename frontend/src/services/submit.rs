//! Submission flow: validate, send, resolve, report.
//!
//! The form state lives behind a [`FormCell`] so the same flow runs against a
//! Leptos signal in the browser and a `RefCell` in tests. The cell is never
//! borrowed across the network await.

use std::cell::RefCell;

use leptos::*;

use crate::form::{FormState, SubmitRejection};
use crate::queue::PreviewStore;
use crate::services::dialogs::Notifier;
use crate::services::inspection::InspectionTransport;

/// Shared, mutable access to a [`FormState`].
pub trait FormCell<F> {
    /// Run `f` against the state. `None` if the state is gone.
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R>;
}

impl<F: 'static> FormCell<F> for RwSignal<FormState<F>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<F> FormCell<F> for RefCell<FormState<F>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut FormState<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was issued.
    Rejected(SubmitRejection),
    Uploaded { count: usize },
    Failed,
}

/// Run one submit attempt end to end.
pub async fn submit<F, C, T, P, N>(
    form: &C,
    transport: &T,
    previews: &P,
    notifier: &N,
) -> SubmitOutcome
where
    F: Clone,
    C: FormCell<F>,
    T: InspectionTransport<F>,
    P: PreviewStore<F>,
    N: Notifier,
{
    let batch = match form.with_form(FormState::begin_submit) {
        Some(Ok(batch)) => batch,
        Some(Err(rejection)) => {
            match rejection.notice() {
                Some(notice) => notifier.post(&notice),
                None => log::debug!("Submit ignored: upload already in progress"),
            }
            return SubmitOutcome::Rejected(rejection);
        }
        None => return SubmitOutcome::Failed,
    };

    let count = batch.len();
    let result = transport.send(&batch).await;
    let uploaded = result.is_ok();

    match form.with_form(|state| state.complete_submit(&result, previews)) {
        Some(notice) => notifier.post(&notice),
        None => log::warn!("Upload finished after the form was disposed"),
    }

    if uploaded {
        SubmitOutcome::Uploaded { count }
    } else {
        SubmitOutcome::Failed
    }
}
