//! HTTP client for the inspection service.
//!
//! A batch goes out as one multipart `POST`. Files and labels travel in two
//! repeated fields and the service pairs them by position, so both fields
//! must follow queue order exactly.

use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::queue::UploadQueue;
use crate::{inspection_endpoint, AppError, AppResult, IMAGES_FIELD, LABELS_FIELD};

/// Snapshot of a validated queue: `(file, label)` in queue order.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionBatch<F> {
    pub entries: Vec<(F, String)>,
}

impl<F: Clone> SubmissionBatch<F> {
    pub fn from_queue(queue: &UploadQueue<F>) -> Self {
        Self {
            entries: queue
                .iter()
                .map(|e| (e.file.clone(), e.label.clone()))
                .collect(),
        }
    }
}

impl<F> SubmissionBatch<F> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One part of the multipart body.
#[derive(Debug, PartialEq)]
pub enum MultipartPart<'a, F> {
    File { field: &'static str, file: &'a F },
    Text { field: &'static str, value: &'a str },
}

/// Parts for `batch`: per entry, its file then its label.
pub fn multipart_parts<F>(batch: &SubmissionBatch<F>) -> Vec<MultipartPart<'_, F>> {
    batch
        .entries
        .iter()
        .flat_map(|(file, label)| {
            [
                MultipartPart::File { field: IMAGES_FIELD, file },
                MultipartPart::Text { field: LABELS_FIELD, value: label.as_str() },
            ]
        })
        .collect()
}

/// Delivers a batch to the inspection service.
pub trait InspectionTransport<F> {
    fn send(&self, batch: &SubmissionBatch<F>) -> impl Future<Output = AppResult<()>>;
}

/// Error body returned by the service, e.g. `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    detail: serde_json::Value,
}

/// Best human-readable detail from an error response body.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ServiceErrorBody>(body) {
        Ok(ServiceErrorBody { detail: serde_json::Value::String(s) }) => s,
        Ok(ServiceErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Message of a JavaScript exception value.
pub fn js_error_message(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}

/// gloo-net client posting `FormData` to the inspection endpoint.
#[derive(Clone, Debug)]
pub struct HttpInspectionClient {
    endpoint: String,
}

impl Default for HttpInspectionClient {
    fn default() -> Self {
        Self::new(inspection_endpoint())
    }
}

impl HttpInspectionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form_data(batch: &SubmissionBatch<File>) -> AppResult<FormData> {
        let form_data = FormData::new().map_err(|e| {
            AppError::Request(format!("Failed to create FormData: {}", js_error_message(&e)))
        })?;

        for part in multipart_parts(batch) {
            let appended = match part {
                MultipartPart::File { field, file } => {
                    form_data.append_with_blob_and_filename(field, file, &file.name())
                }
                MultipartPart::Text { field, value } => form_data.append_with_str(field, value),
            };
            appended.map_err(|e| {
                AppError::Request(format!("Failed to append part: {}", js_error_message(&e)))
            })?;
        }

        Ok(form_data)
    }

    async fn check_status(response: Response) -> AppResult<()> {
        if response.ok() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Server {
            status: response.status(),
            detail: error_detail(&body),
        })
    }
}

impl InspectionTransport<File> for HttpInspectionClient {
    async fn send(&self, batch: &SubmissionBatch<File>) -> AppResult<()> {
        let form_data = Self::form_data(batch)?;

        log::info!("📤 Uploading {} image(s) to {}", batch.len(), self.endpoint);

        // The browser sets the multipart boundary header itself.
        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        Self::check_status(response).await
    }
}
