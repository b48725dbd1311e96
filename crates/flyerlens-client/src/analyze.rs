//! `POST /api/analyze`: send one flyer, get back the extracted event details.

use flyerlens_core::{EventExtraction, FlyerFile};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::{AnalyzeError, ClientBuildError};

/// Multipart field the backend reads the upload from.
const FILE_FIELD: &str = "file";

/// HTTP client for the flyer-analysis endpoint.
///
/// Holds one connection pool; share it by reference across calls. Every call
/// to [`analyze_flyer`](Self::analyze_flyer) issues exactly one request.
pub struct AnalyzeClient {
    client: reqwest::Client,
    config: ClientConfig,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl AnalyzeClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Upload `file` for AI extraction.
    ///
    /// The file is sent as-is under the multipart field `file`; type and size
    /// checks belong to the caller. Failures are normalised into
    /// [`AnalyzeError`] with a message fit to show the user.
    pub async fn analyze_flyer(&self, file: &FlyerFile) -> Result<EventExtraction, AnalyzeError> {
        let url = self.config.analyze_url();

        // `Bytes` clones share the buffer; the payload is not copied.
        let part = Part::stream_with_length(file.bytes.clone(), file.len() as u64)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                warn!(error = %e, content_type = %file.content_type, "invalid upload content type");
                AnalyzeError::from(e)
            })?;
        let form = Form::new().part(FILE_FIELD, part);

        info!(
            url = %url,
            file_name = %file.file_name,
            bytes = file.len(),
            "sending flyer for analysis"
        );
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "analysis request failed");
                AnalyzeError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = parse_detail(&body);
            warn!(status = status.as_u16(), detail = ?detail, "analysis rejected by server");
            return Err(AnalyzeError::server(status.as_u16(), detail));
        }

        let body = resp.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read analysis response");
            AnalyzeError::from(e)
        })?;
        decode_success(&body)
    }
}

/// The `detail` string of an error body, if the body has a non-blank one.
fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

fn decode_success(body: &[u8]) -> Result<EventExtraction, AnalyzeError> {
    let response: AnalyzeResponse = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "malformed analysis response");
        AnalyzeError::transport(Some(e.into()))
    })?;

    if !response.success {
        warn!("analysis returned success=false");
        return Err(AnalyzeError::UnsuccessfulExtraction);
    }

    let Some(data) = response.data else {
        warn!("analysis response carried no data");
        return Err(AnalyzeError::transport(None));
    };
    let extraction: EventExtraction = serde_json::from_value(data).map_err(|e| {
        warn!(error = %e, "analysis payload does not match the extraction schema");
        AnalyzeError::transport(Some(e.into()))
    })?;

    info!(
        event_name = %extraction.event_name,
        confidence = %extraction.confidence,
        "flyer analysed"
    );
    Ok(extraction)
}
