//! HTTP client for the promotion endpoints.
//!
//! Mutations are spawned onto the current tokio runtime and never awaited by
//! the caller. Failures are logged and dropped; there is no retry.

use crate::backend::{CampaignBackend, CampaignRequest, ImpressionSource};
use crate::config::BackendConfig;
use crate::{Error, Result};
use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DailyImpressionsResponse {
    Count(u64),
    Object { daily_impressions: u64 },
}

impl DailyImpressionsResponse {
    fn count(&self) -> u64 {
        match self {
            DailyImpressionsResponse::Count(n) => *n,
            DailyImpressionsResponse::Object { daily_impressions } => *daily_impressions,
        }
    }
}

#[derive(Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    handle: Handle,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl HttpBackend {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| Error::Config("backend.base_url is not set".to_string()))?;
        let handle = Handle::try_current().map_err(|_| {
            Error::InvalidOperation("HTTP backend requires a running tokio runtime".to_string())
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            handle,
            pending: Mutex::new(Vec::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, op: &str) -> String {
        format!("{}/api/{}", self.base_url, op)
    }

    fn post_and_forget(&self, op: &'static str, request: CampaignRequest) {
        let client = self.client.clone();
        let url = self.endpoint(op);
        info!(op, campaign = %request.campaign_id36, "sending request");

        let task = self.handle.spawn(async move {
            match client.post(&url).form(&request).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(op, status = %response.status(), "request accepted");
                }
                Ok(response) => {
                    warn!(op, status = %response.status(), "request rejected by server");
                }
                Err(err) => {
                    warn!(op, error = %err, "request failed");
                }
            }
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.retain(|t| !t.is_finished());
        pending.push(task);
    }

    /// Wait for in-flight requests; call before the process exits.
    pub async fn drain(&self) {
        let tasks: Vec<JoinHandle<()>> = {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *pending)
        };
        for task in tasks {
            if let Err(err) = task.await {
                warn!(error = %err, "background request panicked");
            }
        }
    }
}

impl CampaignBackend for HttpBackend {
    fn delete_campaign(&self, request: CampaignRequest) {
        self.post_and_forget("delete_campaign", request);
    }

    fn mark_free(&self, request: CampaignRequest) {
        self.post_and_forget("freebie", request);
    }
}

impl ImpressionSource for HttpBackend {
    fn daily_impressions<'a>(&'a self, target: &'a str) -> BoxFuture<'a, Result<u64>> {
        Box::pin(async move {
            let url = self.endpoint("daily_impressions.json");
            let response = self
                .client
                .get(&url)
                .query(&[("sr", target)])
                .send()
                .await?
                .error_for_status()?;
            let body: DailyImpressionsResponse = response.json().await?;
            debug!(sr = target, count = body.count(), "daily impressions fetched");
            Ok(body.count())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_accepts_number_or_object() {
        let bare: DailyImpressionsResponse = serde_json::from_str("1500").unwrap();
        assert_eq!(bare.count(), 1500);
        let wrapped: DailyImpressionsResponse =
            serde_json::from_str(r#"{"daily_impressions": 42}"#).unwrap();
        assert_eq!(wrapped.count(), 42);
    }

    #[test]
    fn test_new_requires_base_url() {
        let err = HttpBackend::new(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_new_requires_runtime() {
        let config = BackendConfig {
            base_url: Some("http://localhost:1".to_string()),
            timeout_secs: 1,
        };
        assert!(matches!(
            HttpBackend::new(&config),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[tokio::test]
    async fn test_endpoint_trims_trailing_slash() {
        let config = BackendConfig {
            base_url: Some("http://localhost:1/".to_string()),
            timeout_secs: 1,
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.endpoint("freebie"), "http://localhost:1/api/freebie");
    }
}
