//! HttpAnalysisClient - multipart REST client for the analysis backend.
//!
//! Sends every drawing under the repeated `files` field and the persona
//! display name under `persona` to `POST {base_url}/api/analyze`.
//! One attempt per call: no retry, no backoff.

use std::time::Duration;

use async_trait::async_trait;
use maeum_core::analysis::{
    ANALYZE_PATH, AnalysisClient, AnalysisRequest, AnalysisResponse, FormField,
};
use maeum_core::{MaeumError, Result};
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::config::BackendConfig;

/// Analysis client backed by reqwest.
#[derive(Clone, Debug)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
    request_timeout: Option<Duration>,
}

impl HttpAnalysisClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }

    /// Creates a client from a resolved [`BackendConfig`].
    pub fn from_config(config: &BackendConfig) -> Self {
        let client = Self::new(config.base_url.clone());
        match config.request_timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        }
    }

    /// Gives up on a request after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Full URL of the analyze endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }

    /// Builds the multipart body for `request`.
    fn build_form(request: &AnalysisRequest) -> Result<Form> {
        let mut form = Form::new();

        for field in request.form_fields() {
            form = match field {
                FormField::File { name, drawing } => {
                    let part = Part::bytes(drawing.bytes.clone())
                        .file_name(drawing.name.clone())
                        .mime_str(&drawing.mime_type)
                        .map_err(|e| {
                            MaeumError::invalid_input(format!(
                                "Invalid MIME type '{}' for {}: {}",
                                drawing.mime_type, drawing.name, e
                            ))
                        })?;
                    form.part(name, part)
                }
                FormField::Text { name, value } => form.text(name, value),
            };
        }

        Ok(form)
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        let url = self.endpoint();
        let form = Self::build_form(request)?;

        tracing::info!(
            url = %url,
            files = request.drawings.len(),
            persona = %request.persona,
            "Submitting analysis request"
        );

        let mut builder = self.client.post(&url).multipart(form);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| MaeumError::network(format!("Analysis request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MaeumError::http(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MaeumError::network(format!("Failed to read analysis response: {}", e)))?;

        let analysis: AnalysisResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            keywords = analysis.analysis_result.word_cloud.len(),
            sections = analysis.commentary_sections.len(),
            "Analysis response received"
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maeum_core::persona::PersonaId;
    use maeum_core::upload::UploadedDrawing;

    #[test]
    fn test_endpoint_joins_path() {
        assert_eq!(
            HttpAnalysisClient::new("http://localhost:8000/").endpoint(),
            "http://localhost:8000/api/analyze"
        );
    }

    #[test]
    fn test_build_form_rejects_bad_mime() {
        let request = AnalysisRequest::new(
            vec![UploadedDrawing::new("a.png", "not a mime", vec![1])],
            PersonaId::Pepe,
        );
        let err = HttpAnalysisClient::build_form(&request).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_config_keeps_timeout() {
        let client = HttpAnalysisClient::from_config(&BackendConfig {
            base_url: "http://example.com".into(),
            request_timeout: Some(Duration::from_secs(5)),
        });
        assert_eq!(client.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(client.endpoint(), "http://example.com/api/analyze");
    }
}
