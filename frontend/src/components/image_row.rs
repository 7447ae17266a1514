//! One staged image: thumbnail, label input and remove button.

use leptos::*;
use web_sys::{Event, File};

use crate::services::{DialogService, Notifier, ObjectUrlStore};
use crate::{FormState, PreviewHandle};

#[component]
pub fn ImageRow(
    /// Render key of the entry
    id: u64,
    preview: PreviewHandle,
    form: RwSignal<FormState<File>>,
    dialogs: DialogService,
) -> impl IntoView {
    // Indices shift on removal, so resolve the entry by id on every access
    let label = move || {
        form.with(|state| {
            state
                .queue()
                .find(id)
                .map(|entry| entry.label.clone())
                .unwrap_or_default()
        })
    };
    let position = move || form.with(|state| state.queue().position_of(id).map_or(0, |i| i + 1));

    let on_label_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.update(|state| {
            if let Some(index) = state.queue().position_of(id) {
                state.update_label(index, text);
            }
        });
    };

    let on_remove = move |_| {
        form.update(|state| {
            if let Some(index) = state.queue().position_of(id) {
                state.remove_image(index, &ObjectUrlStore);
            }
        });
    };

    let src = preview.url().to_string();
    let on_preview = move |_| dialogs.show_image_preview(&preview);

    view! {
        <div class="image-field">
            <img src=src alt="Preview" class="preview" on:click=on_preview/>
            <input
                type="text"
                class="label-input"
                placeholder="Add a label..."
                aria-label=move || format!("Label for image {}", position())
                prop:value=label
                on:input=on_label_input
            />
            <button type="button" class="remove-btn" title="Remove image" on:click=on_remove>
                "✖"
            </button>
        </div>
    }
}
