use std::future::Future;

use anyhow::Context;
use reqwest::{header, multipart, Client, ClientBuilder, StatusCode, Url};
use serde::Deserialize;

use crate::configuration::FormSettings;
use crate::domain::FormFields;

/// Delivers one form payload to the submission endpoint.
pub trait SubmissionTransport: Send + Sync {
    fn submit(
        &self,
        fields: &FormFields,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The endpoint answered with a list of error messages, already joined with `, `.
    #[error("{0}")]
    Rejected(String),
    #[error("The submission endpoint answered with {0}.")]
    Unexpected(StatusCode),
    #[error("Failed to reach the submission endpoint.")]
    Transport(#[source] reqwest::Error),
}

impl SubmissionError {
    /// Text for the status region. Only endpoint-provided messages are shown verbatim.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(messages) => messages.clone(),
            Self::Unexpected(_) | Self::Transport(_) => fallback.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

impl ErrorBody {
    fn joined(self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

pub struct HttpSubmissionClient {
    http_client: Client,
    url: Url,
}

impl HttpSubmissionClient {
    pub fn new(config: &FormSettings) -> anyhow::Result<Self> {
        let url = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid submission endpoint {}", config.endpoint))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .context("Failed to build the submission client")?;

        Ok(Self { http_client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    #[tracing::instrument(name = "Posting form to the submission endpoint", skip_all, fields(endpoint = %self.url))]
    pub async fn submit_form(&self, fields: &FormFields) -> Result<(), SubmissionError> {
        let form = fields.iter().fold(multipart::Form::new(), |form, (name, value)| {
            form.text(name.to_string(), value.to_string())
        });

        let response = self
            .http_client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send the form to {}. {e}", self.url);
                SubmissionError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match response.json::<ErrorBody>().await.ok().and_then(ErrorBody::joined) {
            Some(messages) => {
                tracing::warn!(%status, "The endpoint rejected the form: {messages}");
                Err(SubmissionError::Rejected(messages))
            }
            None => {
                tracing::error!(%status, "The endpoint failed without a usable error body.");
                Err(SubmissionError::Unexpected(status))
            }
        }
    }
}

impl SubmissionTransport for HttpSubmissionClient {
    fn submit(
        &self,
        fields: &FormFields,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send {
        self.submit_form(fields)
    }
}
