//! Object URL previews for selected files.

use web_sys::{File, Url};

use crate::queue::PreviewStore;
use crate::services::inspection::js_error_message;
use crate::{AppError, AppResult, PreviewHandle};

/// Hands out `blob:` URLs via `URL.createObjectURL` and revokes them on release.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectUrlStore;

impl PreviewStore<File> for ObjectUrlStore {
    fn acquire(&self, file: &File) -> AppResult<PreviewHandle> {
        Url::create_object_url_with_blob(file)
            .map(PreviewHandle::new)
            .map_err(|e| AppError::Preview(format!("{}: {}", file.name(), js_error_message(&e))))
    }

    fn release(&self, handle: &PreviewHandle) {
        if let Err(e) = Url::revoke_object_url(handle.url()) {
            log::warn!("Failed to revoke preview {}: {}", handle, js_error_message(&e));
        }
    }
}
