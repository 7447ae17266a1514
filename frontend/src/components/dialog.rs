//! Modal renderer for [`DialogService`].
//!
//! Notices carry an OK button. Image previews only have a close icon.
//! Clicking the backdrop dismisses either.

use leptos::*;

use crate::services::{Dialog, DialogService};
use crate::PREVIEW_WIDTH;

#[component]
pub fn DialogHost() -> impl IntoView {
    let dialogs = DialogService::from_context();
    let current = dialogs.current();

    let keep_open = |ev: ev::MouseEvent| ev.stop_propagation();

    move || {
        current.get().map(|dialog| {
            let body = match dialog {
                Dialog::Notice(notice) => view! {
                    <div
                        class=format!("dialog notice {}", notice.kind.css_class())
                        role="alertdialog"
                        on:click=keep_open
                    >
                        <div class="notice-icon">{notice.kind.icon()}</div>
                        <h3 class="notice-title">{notice.title}</h3>
                        <p class="notice-message">{notice.message}</p>
                        <button
                            type="button"
                            class="btn notice-ok"
                            on:click=move |_| dialogs.dismiss()
                        >
                            "OK"
                        </button>
                    </div>
                }
                .into_view(),
                Dialog::ImagePreview(handle) => view! {
                    <div class="dialog image-preview" role="dialog" on:click=keep_open>
                        <button
                            type="button"
                            class="dialog-close"
                            aria-label="Close"
                            on:click=move |_| dialogs.dismiss()
                        >
                            "×"
                        </button>
                        <img
                            src=handle.url().to_string()
                            alt="Image preview"
                            width=PREVIEW_WIDTH.to_string()
                        />
                    </div>
                }
                .into_view(),
            };

            view! {
                <div class="dialog-backdrop" on:click=move |_| dialogs.dismiss()>
                    {body}
                </div>
            }
        })
    }
}
