//! Inspection upload form.
//!
//! Owns the form state: staged images, their labels and the submitting
//! flag. Everything is sent as one multipart request on submit.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::ImageRow;
use crate::services::{submit, DialogService, HttpInspectionClient, ObjectUrlStore};
use crate::{FormState, ACCEPTED_TYPES};

#[component]
pub fn UploadForm() -> impl IntoView {
    let dialogs = DialogService::from_context();
    let form = create_rw_signal(FormState::<File>::new());
    let client = store_value(HttpInspectionClient::default());

    let submitting = move || form.with(|state| state.is_submitting());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            let selected: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
            if !selected.is_empty() {
                form.update(|state| {
                    state.add_images(selected, &ObjectUrlStore);
                });
            }
        }

        // Reset so the same file name can be picked again
        input.set_value("");
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.get_value();
        spawn_local(async move {
            let outcome = submit(&form, &client, &ObjectUrlStore, &dialogs).await;
            log::debug!("Submit finished: {:?}", outcome);
        });
    };

    view! {
        <div class="upload-card">
            <h2>"Inspection Upload Form"</h2>
            <form on:submit=on_submit>
                <fieldset class="image-list" disabled=submitting>
                    <For
                        each=move || {
                            form.with(|state| {
                                state
                                    .queue()
                                    .iter()
                                    .map(|entry| (entry.id, entry.preview.clone()))
                                    .collect::<Vec<_>>()
                            })
                        }
                        key=|(id, _)| *id
                        children=move |(id, preview)| {
                            view! { <ImageRow id=id preview=preview form=form dialogs=dialogs/> }
                        }
                    />
                    <input
                        type="file"
                        accept=ACCEPTED_TYPES
                        multiple=true
                        class="file-input"
                        on:change=on_file_change
                    />
                </fieldset>
                <button type="submit" class="submit-btn" disabled=submitting>
                    {move || if submitting() { "Uploading..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
