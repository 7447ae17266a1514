//! Inspection Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly form for staging images, labelling each one and sending
//! the whole batch to the inspection service in a single multipart request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  InspectionPage (full viewport, centered)                    │
//! │  └── UploadForm                                              │
//! │      ├── ImageRow × N (thumbnail, label, remove)             │
//! │      ├── file input                                          │
//! │      └── submit button                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DialogHost (notices, image preview)                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (PendingImage, Notice, AppError)
//! - [`queue`] - Ordered upload queue with preview ownership
//! - [`form`] - Form state, validation and submission bookkeeping
//! - [`components`] - UI components
//! - [`services`] - Backend communication, previews and dialogs

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod queue;
pub mod form;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Queue
    PendingImage, PreviewHandle,
    // Notices
    Notice, NoticeKind,
    // Errors
    AppError, AppResult,
};

// State
pub use queue::{PreviewStore, UploadQueue};
pub use form::{validate, FormState, SubmitRejection, ValidationError};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    DialogService::provide();

    view! {
        <Title text="Inspection Upload"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=InspectionPage/>
                </Routes>
            </main>
        </Router>
        <DialogHost/>
    }
}

/// Full-viewport region centering the upload form.
#[component]
fn InspectionPage() -> impl IntoView {
    view! {
        <div class="page-center">
            <UploadForm/>
        </div>
    }
}
