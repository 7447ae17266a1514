//! The upload queue: images staged for one batch submission.
//!
//! Entries keep insertion order. That order drives rendering, the indices
//! used for label edits and removal, and the order of parts on the wire.
//! Each entry owns a preview handle acquired on add and released when the
//! entry is removed or the queue is cleared.

use crate::{AppResult, PendingImage, PreviewHandle};

/// Source of thumbnail handles for files of type `F`.
pub trait PreviewStore<F> {
    /// Create a preview for `file`.
    fn acquire(&self, file: &F) -> AppResult<PreviewHandle>;

    /// Release a preview previously returned by [`acquire`](Self::acquire).
    fn release(&self, handle: &PreviewHandle);
}

/// Ordered sequence of [`PendingImage`]s.
#[derive(Clone, Debug)]
pub struct UploadQueue<F> {
    entries: Vec<PendingImage<F>>,
    next_id: u64,
}

impl<F> Default for UploadQueue<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<F> UploadQueue<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PendingImage<F>> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PendingImage<F>> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[PendingImage<F>] {
        &self.entries
    }

    /// Current index of the entry with render key `id`.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn find(&self, id: u64) -> Option<&PendingImage<F>> {
        self.position_of(id).and_then(|i| self.entries.get(i))
    }

    /// Append one entry per file, with an empty label, after existing entries.
    ///
    /// Files whose preview cannot be created are skipped. Returns the number
    /// of entries added.
    pub fn add_images<I>(&mut self, files: I, store: &impl PreviewStore<F>) -> usize
    where
        I: IntoIterator<Item = F>,
    {
        let before = self.entries.len();
        for file in files {
            match store.acquire(&file) {
                Ok(preview) => {
                    let id = self.next_id;
                    self.next_id += 1;
                    self.entries.push(PendingImage {
                        id,
                        file,
                        preview,
                        label: String::new(),
                    });
                }
                Err(e) => log::warn!("Skipping image without preview: {}", e),
            }
        }
        let added = self.entries.len() - before;
        if added > 0 {
            log::debug!("Staged {} image(s), queue size {}", added, self.entries.len());
        }
        added
    }

    /// Replace the label at `index`. Blank text is allowed here.
    pub fn update_label(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.label = text.into();
                true
            }
            None => {
                log::warn!("Label update ignored: no image at index {}", index);
                false
            }
        }
    }

    /// Remove the entry at `index` and release its preview.
    pub fn remove(&mut self, index: usize, store: &impl PreviewStore<F>) -> Option<F> {
        if index >= self.entries.len() {
            log::warn!("Removal ignored: no image at index {}", index);
            return None;
        }
        let entry = self.entries.remove(index);
        store.release(&entry.preview);
        log::debug!("Removed image {}, queue size {}", index + 1, self.entries.len());
        Some(entry.file)
    }

    /// Drop every entry, releasing all previews.
    pub fn clear(&mut self, store: &impl PreviewStore<F>) {
        for entry in self.entries.drain(..) {
            store.release(&entry.preview);
        }
    }

    /// Index of the first entry whose trimmed label is empty.
    pub fn first_blank_label(&self) -> Option<usize> {
        self.entries.iter().position(PendingImage::has_blank_label)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::PreviewStore;
    use crate::{AppError, AppResult, PreviewHandle};

    /// Preview store that hands out `blob:<name>#<n>` URLs and records releases.
    #[derive(Default)]
    pub struct RecordingPreviews {
        pub issued: RefCell<Vec<PreviewHandle>>,
        pub released: RefCell<Vec<PreviewHandle>>,
        pub reject: Option<&'static str>,
    }

    impl RecordingPreviews {
        pub fn live(&self) -> usize {
            self.issued.borrow().len() - self.released.borrow().len()
        }
    }

    impl PreviewStore<&'static str> for RecordingPreviews {
        fn acquire(&self, file: &&'static str) -> AppResult<PreviewHandle> {
            if self.reject == Some(*file) {
                return Err(AppError::Preview(format!("cannot read {}", file)));
            }
            let mut issued = self.issued.borrow_mut();
            let handle = PreviewHandle::new(format!("blob:{}#{}", file, issued.len()));
            issued.push(handle.clone());
            Ok(handle)
        }

        fn release(&self, handle: &PreviewHandle) {
            self.released.borrow_mut().push(handle.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingPreviews;
    use super::*;

    fn files(queue: &UploadQueue<&'static str>) -> Vec<&'static str> {
        queue.iter().map(|e| e.file).collect()
    }

    #[test]
    fn test_add_images_appends_in_selection_order() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();

        assert_eq!(queue.add_images(["A.jpg", "B.jpg"], &previews), 2);
        assert_eq!(queue.add_images(Vec::new(), &previews), 0);
        assert_eq!(queue.add_images(["C.jpg", "A.jpg"], &previews), 2);

        assert_eq!(files(&queue), ["A.jpg", "B.jpg", "C.jpg", "A.jpg"]);
        assert!(queue.iter().all(|e| e.label.is_empty()));
        assert_eq!(previews.live(), 4);
    }

    #[test]
    fn test_ids_stay_unique_after_removal() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg", "B.jpg"], &previews);
        queue.remove(1, &previews);
        queue.add_images(["C.jpg"], &previews);

        let ids: Vec<u64> = queue.iter().map(|e| e.id).collect();
        assert_eq!(ids, [0, 2]);
        assert_eq!(queue.position_of(2), Some(1));
        assert_eq!(queue.find(2).map(|e| e.file), Some("C.jpg"));
        assert_eq!(queue.position_of(1), None);
    }

    #[test]
    fn test_add_skips_file_without_preview() {
        let previews = RecordingPreviews {
            reject: Some("broken.png"),
            ..Default::default()
        };
        let mut queue = UploadQueue::new();

        assert_eq!(queue.add_images(["A.jpg", "broken.png", "B.jpg"], &previews), 2);
        assert_eq!(files(&queue), ["A.jpg", "B.jpg"]);
    }

    #[test]
    fn test_update_label_touches_only_target() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg", "B.jpg", "C.jpg"], &previews);
        let before = queue.clone();

        assert!(queue.update_label(1, "crack"));

        assert_eq!(queue.get(1).map(|e| e.label.as_str()), Some("crack"));
        for i in [0, 2] {
            assert_eq!(queue.get(i), before.get(i));
        }
        assert_eq!(queue.get(1).map(|e| &e.preview), before.get(1).map(|e| &e.preview));
    }

    #[test]
    fn test_update_label_out_of_range_is_ignored() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg"], &previews);

        assert!(!queue.update_label(5, "dent"));
        assert_eq!(queue.get(0).map(|e| e.label.as_str()), Some(""));
    }

    #[test]
    fn test_remove_shifts_later_entries_and_releases_preview() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg", "B.jpg", "C.jpg", "D.jpg"], &previews);
        queue.update_label(3, "rust");
        let removed_preview = queue.get(1).map(|e| e.preview.clone());

        assert_eq!(queue.remove(1, &previews), Some("B.jpg"));

        assert_eq!(files(&queue), ["A.jpg", "C.jpg", "D.jpg"]);
        assert_eq!(queue.get(2).map(|e| e.label.as_str()), Some("rust"));
        assert_eq!(previews.released.borrow().first().cloned(), removed_preview);
        assert_eq!(previews.live(), 3);
    }

    #[test]
    fn test_remove_out_of_range_keeps_queue() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg"], &previews);

        assert_eq!(queue.remove(1, &previews), None);
        assert_eq!(queue.len(), 1);
        assert!(previews.released.borrow().is_empty());
    }

    #[test]
    fn test_clear_releases_every_preview() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg", "B.jpg", "A.jpg"], &previews);

        queue.clear(&previews);

        assert!(queue.is_empty());
        assert_eq!(previews.live(), 0);
    }

    #[test]
    fn test_first_blank_label_finds_earliest() {
        let previews = RecordingPreviews::default();
        let mut queue = UploadQueue::new();
        queue.add_images(["A.jpg", "B.jpg", "C.jpg"], &previews);
        queue.update_label(0, "scratch");
        queue.update_label(1, "   ");

        assert_eq!(queue.first_blank_label(), Some(1));

        queue.update_label(1, "dent");
        queue.update_label(2, "crack");
        assert_eq!(queue.first_blank_label(), None);
    }
}
