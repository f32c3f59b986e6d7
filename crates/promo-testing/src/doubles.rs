//! Test doubles for the runtime seams.

use futures::future::BoxFuture;
use promo_runtime::{
    CampaignBackend, CampaignRequest, Error, ImpressionSource, Result, Step, Surface,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCall {
    Delete,
    Free,
}

/// Backend that records every request instead of sending it.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<(BackendCall, CampaignRequest)>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(BackendCall, CampaignRequest)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn count(&self, kind: BackendCall) -> usize {
        self.calls().iter().filter(|(k, _)| *k == kind).count()
    }

    fn record(&self, kind: BackendCall, request: CampaignRequest) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((kind, request));
        }
    }
}

impl CampaignBackend for RecordingBackend {
    fn delete_campaign(&self, request: CampaignRequest) {
        self.record(BackendCall::Delete, request);
    }

    fn mark_free(&self, request: CampaignRequest) {
        self.record(BackendCall::Free, request);
    }
}

/// Impression source backed by a fixed map; counts lookups.
#[derive(Debug, Default)]
pub struct StaticImpressions {
    by_target: HashMap<String, u64>,
    lookups: AtomicUsize,
}

impl StaticImpressions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, target: &str, daily: u64) -> Self {
        self.by_target.insert(target.to_string(), daily);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ImpressionSource for StaticImpressions {
    fn daily_impressions<'a>(&'a self, target: &'a str) -> BoxFuture<'a, Result<u64>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let found = self.by_target.get(target).copied();
        Box::pin(async move {
            found.ok_or_else(|| Error::InvalidOperation(format!("no impressions for '{}'", target)))
        })
    }
}

/// Surface that keeps every applied step and counts `done` calls.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub steps: Vec<Step>,
    pub done_calls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, step: &Step) -> Result<()> {
        self.steps.push(step.clone());
        Ok(())
    }

    fn done(&mut self) {
        self.done_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_types::CampaignId;

    #[test]
    fn test_recording_backend_keeps_order() {
        let backend = RecordingBackend::new();
        let request = CampaignRequest {
            campaign_id36: CampaignId::from_number(7),
            link_id: "t3_abc".to_string(),
        };
        backend.mark_free(request.clone());
        backend.delete_campaign(request);

        let kinds: Vec<_> = backend.calls().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![BackendCall::Free, BackendCall::Delete]);
    }

    #[tokio::test]
    async fn test_static_impressions_counts_lookups() {
        let source = StaticImpressions::new().with("pics", 1200);
        assert_eq!(source.daily_impressions("pics").await.ok(), Some(1200));
        assert!(source.daily_impressions("").await.is_err());
        assert_eq!(source.lookups(), 2);
    }
}
