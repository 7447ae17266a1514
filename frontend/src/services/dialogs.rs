//! Modal dialog service.
//!
//! Components report outcomes through the [`Notifier`] trait instead of
//! talking to a global alert widget. [`DialogService`] is the Leptos
//! implementation; it is provided as context and rendered by `DialogHost`.

use leptos::*;

use crate::{Notice, NoticeKind, PreviewHandle};

/// Sink for user-facing feedback.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str);

    /// Show an enlarged image with no action buttons.
    fn show_image_preview(&self, handle: &PreviewHandle);

    fn post(&self, notice: &Notice) {
        self.notify(notice.kind, &notice.title, &notice.message);
    }
}

/// What the modal is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Notice(Notice),
    ImagePreview(PreviewHandle),
}

/// Single-slot modal. Opening a dialog replaces the one on screen.
#[derive(Clone, Copy)]
pub struct DialogService {
    current: RwSignal<Option<Dialog>>,
}

impl DialogService {
    pub fn new() -> Self {
        Self { current: create_rw_signal(None) }
    }

    /// Create the service and provide it to descendants.
    pub fn provide() -> Self {
        let service = Self::new();
        provide_context(service);
        service
    }

    /// The service provided by an ancestor.
    pub fn from_context() -> Self {
        expect_context::<Self>()
    }

    pub fn current(&self) -> Signal<Option<Dialog>> {
        self.current.into()
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for DialogService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DialogService {
    fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        self.current
            .set(Some(Dialog::Notice(Notice::new(kind, title, message))));
    }

    fn show_image_preview(&self, handle: &PreviewHandle) {
        self.current.set(Some(Dialog::ImagePreview(handle.clone())));
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn test_post_forwards_notice_fields() {
        let notifier = RecordingNotifier::default();
        notifier.post(&Notice::no_images());
        notifier.show_image_preview(&PreviewHandle::new("blob:a"));

        assert_eq!(notifier.notices(), vec![Notice::no_images()]);
        assert_eq!(
            notifier.shown.borrow().last(),
            Some(&Dialog::ImagePreview(PreviewHandle::new("blob:a")))
        );
    }

    #[test]
    fn test_dialog_service_replaces_and_dismisses() {
        let runtime = create_runtime();
        let dialogs = DialogService::new();

        dialogs.post(&Notice::upload_failed());
        dialogs.show_image_preview(&PreviewHandle::new("blob:b"));
        assert_eq!(
            dialogs.current().get_untracked(),
            Some(Dialog::ImagePreview(PreviewHandle::new("blob:b")))
        );

        dialogs.dismiss();
        assert_eq!(dialogs.current().get_untracked(), None);
        runtime.dispose();
    }
}
