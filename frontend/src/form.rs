//! Form state: the upload queue plus the in-flight submission flag.
//!
//! Validation runs only at submit time and fails fast on the first
//! violation. While a request is outstanding the queue is frozen, so the
//! clear-on-success step only ever retires entries the request carried.

use thiserror::Error;

use crate::queue::{PreviewStore, UploadQueue};
use crate::services::inspection::SubmissionBatch;
use crate::{AppResult, Notice};

/// Reason a queue cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no images attached")]
    NoImages,

    /// `position` is 1-based.
    #[error("label missing for image {position}")]
    MissingLabel { position: usize },
}

impl ValidationError {
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::NoImages => Notice::no_images(),
            ValidationError::MissingLabel { position } => Notice::missing_label(*position),
        }
    }
}

/// Check that the queue is non-empty and every label is non-blank.
pub fn validate<F>(queue: &UploadQueue<F>) -> Result<(), ValidationError> {
    if queue.is_empty() {
        return Err(ValidationError::NoImages);
    }
    match queue.first_blank_label() {
        Some(index) => Err(ValidationError::MissingLabel { position: index + 1 }),
        None => Ok(()),
    }
}

/// Why a submit attempt did not produce a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A previous submission has not resolved yet.
    InFlight,
    Invalid(ValidationError),
}

impl SubmitRejection {
    /// Notice to show, if any. Repeat clicks while in flight stay silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitRejection::InFlight => None,
            SubmitRejection::Invalid(e) => Some(e.notice()),
        }
    }
}

/// Everything the upload form owns.
#[derive(Clone, Debug)]
pub struct FormState<F> {
    queue: UploadQueue<F>,
    submitting: bool,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self {
            queue: UploadQueue::new(),
            submitting: false,
        }
    }
}

impl<F> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &UploadQueue<F> {
        &self.queue
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn add_images<I>(&mut self, files: I, store: &impl PreviewStore<F>) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        if self.refuse_while_submitting("add images") {
            return 0;
        }
        self.queue.add_images(files, store)
    }

    pub fn update_label(&mut self, index: usize, text: impl Into<String>) -> bool {
        if self.refuse_while_submitting("edit a label") {
            return false;
        }
        self.queue.update_label(index, text)
    }

    pub fn remove_image(&mut self, index: usize, store: &impl PreviewStore<F>) -> Option<F> {
        if self.refuse_while_submitting("remove an image") {
            return None;
        }
        self.queue.remove(index, store)
    }

    fn refuse_while_submitting(&self, action: &str) -> bool {
        if self.submitting {
            log::warn!("Cannot {} while an upload is in progress", action);
        }
        self.submitting
    }
}

impl<F: Clone> FormState<F> {
    /// Validate and, if the queue is acceptable, mark a submission in flight.
    ///
    /// The returned batch is a snapshot of files and labels in queue order.
    pub fn begin_submit(&mut self) -> Result<SubmissionBatch<F>, SubmitRejection> {
        if self.submitting {
            return Err(SubmitRejection::InFlight);
        }
        validate(&self.queue).map_err(SubmitRejection::Invalid)?;
        self.submitting = true;
        Ok(SubmissionBatch::from_queue(&self.queue))
    }

    /// Resolve the in-flight submission and return the notice to show.
    ///
    /// Success clears the queue; failure leaves it exactly as it was.
    pub fn complete_submit(
        &mut self,
        result: &AppResult<()>,
        store: &impl PreviewStore<F>,
    ) -> Notice {
        self.submitting = false;
        match result {
            Ok(()) => {
                log::info!("Inspection upload accepted ({} image(s))", self.queue.len());
                self.queue.clear(store);
                Notice::upload_succeeded()
            }
            Err(e) => {
                log::error!("Error uploading images: {}", e);
                Notice::upload_failed()
            }
        }
    }
}
