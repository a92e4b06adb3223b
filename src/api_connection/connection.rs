use reqwest::{Client, StatusCode};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::endpoints::{fallback_ingredients, NewIngredientPayload, SubmissionResponse};
use crate::catalog::data_loader::parse_ingredient_csv;
use crate::config::CalculatorConfig;
use crate::models::IngredientRecord;
use crate::new_ingredient::NewIngredientForm;

/// The ingredient list could not be read. Recovered by [`IngredientSource::fetch_all`].
#[derive(Debug, Error)]
pub enum UnavailableError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Ingredient source answered HTTP {0}")]
    Status(StatusCode),

    #[error("CSV error: {0}")]
    Parse(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A new ingredient was not stored. Always surfaced to the caller, never retried.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Submission endpoint answered HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Service replied without a truthy `success`. Displays the service's own message.
    #[error("{0}")]
    Rejected(String),

    #[error("Unreadable submission response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Ingredient source {0:?} is a local file and does not accept new ingredients")]
    ReadOnlySource(PathBuf),
}

#[derive(Debug, Clone)]
pub enum IngredientSource {
    /// The shared spreadsheet: CSV export for reads, script endpoint for additions.
    PublishedSheet {
        client: Client,
        csv_url: String,
        submit_url: String,
    },
    /// A CSV file on disk in the same format as the sheet export. Read-only.
    LocalCsv { path: PathBuf },
}

impl IngredientSource {
    pub fn published(csv_url: &str, submit_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dish-calc/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::PublishedSheet {
            client,
            csv_url: csv_url.to_string(),
            submit_url: submit_url.to_string(),
        })
    }

    pub fn local_csv(path: impl Into<PathBuf>) -> Self {
        Self::LocalCsv { path: path.into() }
    }

    /// A configured local file takes precedence over the published sheet.
    pub fn from_config(config: &CalculatorConfig) -> Result<Self, reqwest::Error> {
        match &config.csv_file {
            Some(path) => Ok(Self::local_csv(path)),
            None => Self::published(&config.csv_url, &config.submit_url, config.timeout),
        }
    }

    /// Reads and parses the whole ingredient list, reporting any failure.
    pub async fn try_fetch_all(&self) -> Result<Vec<IngredientRecord>, UnavailableError> {
        let csv_text = match self {
            IngredientSource::PublishedSheet { client, csv_url, .. } => {
                debug!("Fetching ingredient sheet from {}", csv_url);
                let response = client.get(csv_url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(UnavailableError::Status(status));
                }
                response.text().await?
            }
            IngredientSource::LocalCsv { path } => {
                debug!("Reading ingredient CSV from {:?}", path);
                tokio::fs::read_to_string(path).await?
            }
        };

        let ingredients = parse_ingredient_csv(&csv_text)?;
        info!("Loaded {} ingredients", ingredients.len());
        Ok(ingredients)
    }

    /// Reads the ingredient list, substituting the one-record fallback on any failure
    /// so the calculator stays usable.
    pub async fn fetch_all(&self) -> Vec<IngredientRecord> {
        match self.try_fetch_all().await {
            Ok(ingredients) => ingredients,
            Err(e) => {
                warn!("Ingredient source unavailable, using fallback list: {}", e);
                fallback_ingredients()
            }
        }
    }

    /// Validates the form and submits it.
    pub async fn add(&self, form: &NewIngredientForm) -> Result<(), SubmissionError> {
        let record = form.validate()?;
        self.submit(&record).await
    }

    /// Posts an already-built record. Success is decided by a truthy `success` flag in the reply body.
    pub async fn submit(&self, record: &IngredientRecord) -> Result<(), SubmissionError> {
        match self {
            IngredientSource::PublishedSheet { client, submit_url, .. } => {
                info!("Submitting new ingredient '{}'", record.name);
                let response = client
                    .post(submit_url)
                    .json(&NewIngredientPayload::from(record))
                    .send()
                    .await?;

                let status = response.status();
                let body = response.text().await?;

                let reply: SubmissionResponse = match serde_json::from_str(&body) {
                    Ok(reply) => reply,
                    Err(_) if !status.is_success() => {
                        return Err(SubmissionError::Status { status, body });
                    }
                    Err(e) => return Err(SubmissionError::MalformedResponse(e)),
                };

                if !reply.is_success() {
                    let message = reply.failure_message();
                    warn!("Ingredient '{}' rejected: {}", record.name, message);
                    return Err(SubmissionError::Rejected(message));
                }

                info!("Ingredient '{}' added", record.name);
                Ok(())
            }
            IngredientSource::LocalCsv { path } => Err(SubmissionError::ReadOnlySource(path.clone())),
        }
    }
}
