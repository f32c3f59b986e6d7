use crate::Result;
use crate::backend::ImpressionSource;
use std::collections::HashMap;
use tracing::debug;

/// Daily impressions per target, filled lazily and kept for the session.
///
/// Concurrent lookups for the same target are not deduplicated: two misses
/// in flight both hit the source, and the later answer wins.
#[derive(Debug, Default, Clone)]
pub struct ImpressionsCache {
    entries: HashMap<String, u64>,
    hits: u64,
    misses: u64,
}

impl ImpressionsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: &str) -> Option<u64> {
        self.entries.get(target).copied()
    }

    pub fn insert(&mut self, target: impl Into<String>, daily: u64) {
        self.entries.insert(target.into(), daily);
    }

    pub async fn get_or_fetch<S>(&mut self, source: &S, target: &str) -> Result<u64>
    where
        S: ImpressionSource + ?Sized,
    {
        if let Some(daily) = self.get(target) {
            self.hits += 1;
            debug!(sr = target, daily, "impressions cache hit");
            return Ok(daily);
        }

        self.misses += 1;
        let daily = source.daily_impressions(target).await?;
        self.insert(target, daily);
        Ok(daily)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FixedImpressions;

    #[tokio::test]
    async fn test_second_lookup_is_served_from_cache() -> Result<()> {
        let mut cache = ImpressionsCache::new();
        let source = FixedImpressions(1000);

        assert_eq!(cache.get_or_fetch(&source, "pics").await?, 1000);
        assert_eq!(cache.get_or_fetch(&source, "pics").await?, 1000);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sitewide_and_targeted_are_separate_keys() -> Result<()> {
        let mut cache = ImpressionsCache::new();
        cache.insert("", 50_000);

        let source = FixedImpressions(7);
        assert_eq!(cache.get_or_fetch(&source, "").await?, 50_000);
        assert_eq!(cache.get_or_fetch(&source, "aww").await?, 7);
        assert_eq!(cache.len(), 2);
        Ok(())
    }
}
