//! Memoizing wrapper around a [`RadiusSource`].
//!
//! Results are keyed by the full query tuple and kept for the life of the
//! process. The cache is bounded: once `capacity` entries exist the oldest
//! fetch is evicted. Errors are never cached, so a failed lookup is retried on
//! the next render.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parkdemand_core::{RadiusQuery, RadiusSource, SuggestedRadius};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CachedRadius {
    pub value: SuggestedRadius,
    pub fetched_at: DateTime<Utc>,
}

pub struct RadiusCache<S> {
    source: S,
    capacity: usize,
    entries: Mutex<HashMap<RadiusQuery, CachedRadius>>,
}

impl<S> RadiusCache<S>
where
    S: RadiusSource + Sync,
{
    /// Wraps `source`; a `capacity` of zero is treated as one.
    #[must_use]
    pub fn new(source: S, capacity: usize) -> Self {
        Self {
            source,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `query`, fetching it on a miss.
    ///
    /// The lock is held across the fetch so concurrent identical lookups
    /// reach the source once.
    ///
    /// # Errors
    ///
    /// Propagates the source's error on a miss.
    pub async fn get(&self, query: &RadiusQuery) -> Result<SuggestedRadius, S::Error> {
        let mut entries = self.entries.lock().await;
        if let Some(hit) = entries.get(query) {
            tracing::debug!(
                origin = %query.origin(),
                unit = %query.unit,
                fetched_at = %hit.fetched_at,
                "suggested radius cache hit"
            );
            return Ok(hit.value.clone());
        }

        tracing::info!(
            origin = %query.origin(),
            unit = %query.unit,
            industry = %query.industry,
            "suggested radius cache miss; fetching"
        );
        let value = self.source.suggested_radius(query).await?;
        Self::insert(&mut entries, self.capacity, query.clone(), value.clone());
        Ok(value)
    }

    fn insert(
        entries: &mut HashMap<RadiusQuery, CachedRadius>,
        capacity: usize,
        query: RadiusQuery,
        value: SuggestedRadius,
    ) {
        if !entries.contains_key(&query) && entries.len() >= capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, cached)| cached.fetched_at)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                entries.remove(&key);
            }
        }
        entries.insert(
            query,
            CachedRadius {
                value,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Records a result fetched in an earlier render cycle.
    ///
    /// Follows the same capacity rule as a fetched entry.
    pub async fn seed(&self, query: RadiusQuery, value: SuggestedRadius) {
        let mut entries = self.entries.lock().await;
        Self::insert(&mut entries, self.capacity, query, value);
    }

    #[must_use]
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    #[must_use]
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> RadiusSource for RadiusCache<S>
where
    S: RadiusSource + Sync,
{
    type Error = S::Error;

    async fn suggested_radius(&self, query: &RadiusQuery) -> Result<SuggestedRadius, S::Error> {
        self.get(query).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use parkdemand_core::RadiusUnit;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("simulated outage")]
    struct Outage;

    /// Counts calls; fails the first `fail_first` of them.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail_first: usize,
    }

    impl RadiusSource for CountingSource {
        type Error = Outage;

        async fn suggested_radius(&self, query: &RadiusQuery) -> Result<SuggestedRadius, Outage> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if n < self.fail_first {
                return Err(Outage);
            }
            Ok(SuggestedRadius {
                radius: Some(query.lat.abs() / 10.0),
                radius_unit: Some(query.unit.to_string()),
                location: None,
                metadata: serde_json::Map::new(),
            })
        }
    }

    fn query(lat: f64, unit: RadiusUnit) -> RadiusQuery {
        RadiusQuery::new(lat, -80.19065, unit, "parking")
    }

    #[tokio::test]
    async fn identical_queries_fetch_once() {
        let cache = RadiusCache::new(CountingSource::default(), 8);
        let q = query(25.7878, RadiusUnit::Mi);

        let first = cache.get(&q).await.unwrap();
        let second = cache.get(&q).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn unit_is_part_of_the_key() {
        let cache = RadiusCache::new(CountingSource::default(), 8);
        cache.get(&query(25.7878, RadiusUnit::Mi)).await.unwrap();
        cache.get(&query(25.7878, RadiusUnit::Km)).await.unwrap();
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let source = CountingSource {
            fail_first: 1,
            ..CountingSource::default()
        };
        let cache = RadiusCache::new(source, 8);
        let q = query(41.5, RadiusUnit::Mi);

        assert!(cache.get(&q).await.is_err());
        assert!(cache.is_empty().await);
        assert!(cache.get(&q).await.is_ok());
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn oldest_entry_is_evicted_at_capacity() {
        let cache = RadiusCache::new(CountingSource::default(), 2);
        let a = query(1.0, RadiusUnit::Mi);
        let b = query(2.0, RadiusUnit::Mi);
        let c = query(3.0, RadiusUnit::Mi);

        cache.get(&a).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        cache.get(&b).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        cache.get(&c).await.unwrap();
        assert_eq!(cache.len().await, 2);

        // `b` and `c` survived; `a` must be fetched again.
        cache.get(&b).await.unwrap();
        cache.get(&c).await.unwrap();
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 3);
        cache.get(&a).await.unwrap();
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn concurrent_identical_lookups_fetch_once() {
        let cache = Arc::new(RadiusCache::new(CountingSource::default(), 8));
        let q = query(47.61354, RadiusUnit::Mi);

        let (a, b) = tokio::join!(cache.get(&q), cache.get(&q));
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn seeded_entry_is_served_without_fetching() {
        let cache = RadiusCache::new(CountingSource::default(), 8);
        let q = query(39.09906, RadiusUnit::Mi);
        let seeded = SuggestedRadius {
            radius: Some(0.9),
            radius_unit: Some("mi".to_owned()),
            location: None,
            metadata: serde_json::Map::new(),
        };

        cache.seed(q.clone(), seeded.clone()).await;
        assert_eq!(cache.get(&q).await.unwrap(), seeded);
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn clear_forgets_everything() {
        let cache = RadiusCache::new(CountingSource::default(), 8);
        let q = query(36.16145, RadiusUnit::Mi);
        cache.get(&q).await.unwrap();
        cache.clear().await;
        cache.get(&q).await.unwrap();
        assert_eq!(cache.source().calls.load(Ordering::SeqCst), 2);
    }
}
