//! Hosted store client for lead submissions
//!
//! Inserts one row into the `submissions` table through the store's REST
//! endpoint and returns the created row, if the store sends it back.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::StoreError;
use crate::types::{StoredSubmission, SubmissionRecord};

/// Table receiving form submissions
pub const SUBMISSIONS_TABLE: &str = "submissions";

/// Anything that can persist a submission record
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Insert one row. `Ok(None)` means the store accepted the row but did
    /// not return it in a readable form.
    async fn insert(&self, record: &SubmissionRecord)
        -> Result<Option<StoredSubmission>, StoreError>;
}

/// REST client for the hosted store
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Error body returned by the REST layer on rejected requests
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        Self::new(
            &settings.supabase_url,
            &settings.supabase_anon_key,
            settings.store_timeout(),
        )
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, SUBMISSIONS_TABLE)
    }
}

#[async_trait]
impl SubmissionStore for RestStore {
    /// Calls POST /rest/v1/submissions asking for the inserted row back
    async fn insert(
        &self,
        record: &SubmissionRecord,
    ) -> Result<Option<StoredSubmission>, StoreError> {
        let url = self.table_url();
        debug!(url = %url, "Inserting submission");

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let parsed: Option<RestErrorBody> = serde_json::from_slice(&body).ok();
            let code = parsed.as_ref().and_then(|b| b.code.clone());
            let message = parsed
                .as_ref()
                .and_then(describe_rejection)
                .unwrap_or_else(|| body_snippet(&body));

            return Err(StoreError::Rejected {
                status: status.as_u16(),
                code,
                message,
            });
        }

        // Accepted without a representation
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        // The status already says the row is stored; an unexpected body
        // must not turn that into a failure the user would retry.
        let rows: Vec<StoredSubmission> = match serde_json::from_slice(&body) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    error = %e,
                    body = %body_snippet(&body),
                    "Submission stored but returned row could not be decoded"
                );
                return Ok(None);
            }
        };

        let row = rows.into_iter().next();
        if let Some(row) = &row {
            info!(id = %row.id, "Submission stored");
        }
        Ok(row)
    }
}

fn describe_rejection(body: &RestErrorBody) -> Option<String> {
    let message = body.message.clone()?;
    let extra: Vec<&str> = [body.details.as_deref(), body.hint.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();

    if extra.is_empty() {
        Some(message)
    } else {
        Some(format!("{} ({})", message, extra.join("; ")))
    }
}

fn body_snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(&body[..body.len().min(200)]).into_owned()
}
