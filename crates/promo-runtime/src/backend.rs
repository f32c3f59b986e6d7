use crate::Result;
use futures::future::BoxFuture;
use promo_types::CampaignId;
use serde::{Deserialize, Serialize};

/// Body of the per-campaign backend calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRequest {
    pub campaign_id36: CampaignId,
    pub link_id: String,
}

/// Fire-and-forget campaign mutations.
///
/// Implementations must not block and must not report failures back to the
/// caller; the server validates and the table proceeds regardless.
pub trait CampaignBackend {
    fn delete_campaign(&self, request: CampaignRequest);
    fn mark_free(&self, request: CampaignRequest);
}

/// Expected daily impressions for a target (empty string for sitewide).
pub trait ImpressionSource {
    fn daily_impressions<'a>(&'a self, target: &'a str) -> BoxFuture<'a, Result<u64>>;
}

/// Backend that drops every request; used when no base URL is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineBackend;

impl CampaignBackend for OfflineBackend {
    fn delete_campaign(&self, request: CampaignRequest) {
        tracing::info!(campaign = %request.campaign_id36, "offline: skipped delete_campaign");
    }

    fn mark_free(&self, request: CampaignRequest) {
        tracing::info!(campaign = %request.campaign_id36, "offline: skipped freebie");
    }
}

/// Impression source answering the same count for every target.
#[derive(Debug, Clone, Copy)]
pub struct FixedImpressions(pub u64);

impl ImpressionSource for FixedImpressions {
    fn daily_impressions<'a>(&'a self, _target: &'a str) -> BoxFuture<'a, Result<u64>> {
        let count = self.0;
        Box::pin(async move { Ok(count) })
    }
}
