//! Caching layer for NexTrip reference data.
//!
//! Route, direction, and stop lists change rarely, so responses are
//! cached briefly to avoid re-fetching them on every form edit.
//! Departures are live data and are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{DirectionCode, RouteCode, StopCode};
use crate::nextrip::{DepartureDto, DirectionDto, NexTripError, RouteDto, StopDto, TransitApi};

/// Configuration for the reference-data cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the route list.
    pub routes_ttl: Duration,

    /// TTL for direction and stop lists.
    pub ref_ttl: Duration,

    /// Maximum number of cached direction/stop lists.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            routes_ttl: Duration::from_secs(60 * 60),
            ref_ttl: Duration::from_secs(5 * 60),
            max_capacity: 200,
        }
    }
}

/// NexTrip client with reference-data caching.
///
/// Wraps any [`TransitApi`] implementation and caches the route,
/// direction, and stop lists. Departure requests always go to the
/// inner client.
pub struct CachedTransit<C> {
    client: C,
    routes: MokaCache<(), Arc<Vec<RouteDto>>>,
    directions: MokaCache<RouteCode, Arc<Vec<DirectionDto>>>,
    stops: MokaCache<(RouteCode, DirectionCode), Arc<Vec<StopDto>>>,
}

impl<C: TransitApi> CachedTransit<C> {
    /// Create a new cached client.
    pub fn new(client: C, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.routes_ttl)
            .max_capacity(1)
            .build();
        let directions = MokaCache::builder()
            .time_to_live(config.ref_ttl)
            .max_capacity(config.max_capacity)
            .build();
        let stops = MokaCache::builder()
            .time_to_live(config.ref_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            routes,
            directions,
            stops,
        }
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Drop all cached reference data.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
        self.directions.invalidate_all();
        self.stops.invalidate_all();
    }
}

impl<C: TransitApi> TransitApi for CachedTransit<C> {
    async fn routes(&self) -> Result<Vec<RouteDto>, NexTripError> {
        if let Some(cached) = self.routes.get(&()).await {
            return Ok(cached.as_ref().clone());
        }

        let fetched = self.client.routes().await?;
        self.routes.insert((), Arc::new(fetched.clone())).await;
        Ok(fetched)
    }

    async fn directions(&self, route: &RouteCode) -> Result<Vec<DirectionDto>, NexTripError> {
        if let Some(cached) = self.directions.get(route).await {
            return Ok(cached.as_ref().clone());
        }

        let fetched = self.client.directions(route).await?;
        self.directions
            .insert(route.clone(), Arc::new(fetched.clone()))
            .await;
        Ok(fetched)
    }

    async fn stops(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
    ) -> Result<Vec<StopDto>, NexTripError> {
        let key = (route.clone(), *direction);
        if let Some(cached) = self.stops.get(&key).await {
            return Ok(cached.as_ref().clone());
        }

        let fetched = self.client.stops(route, direction).await?;
        self.stops.insert(key, Arc::new(fetched.clone())).await;
        Ok(fetched)
    }

    async fn departures(
        &self,
        route: &RouteCode,
        direction: &DirectionCode,
        stop: &StopCode,
    ) -> Result<Vec<DepartureDto>, NexTripError> {
        // Live data, never cached.
        self.client.departures(route, direction, stop).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextrip::mock::MockTransit;
    use crate::nextrip::{NexTripClient, NexTripConfig};

    fn blue() -> RouteCode {
        RouteCode::parse("901").unwrap()
    }

    fn mall() -> StopCode {
        StopCode::parse("MAAM").unwrap()
    }

    fn cached_mock() -> CachedTransit<MockTransit> {
        let mock = MockTransit::new()
            .with_route("901", "METRO Blue Line")
            .with_directions(blue(), &[("1", "SOUTHBOUND")])
            .with_stops(
                blue(),
                DirectionCode::SOUTH,
                &[("MAAM", "Mall of America Station")],
            );
        CachedTransit::new(mock, &CacheConfig::default())
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.routes_ttl, Duration::from_secs(3600));
        assert_eq!(config.ref_ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 200);
    }

    #[test]
    fn cached_client_creation() {
        let client = NexTripClient::new(NexTripConfig::new()).unwrap();
        let cached = CachedTransit::new(client, &CacheConfig::default());
        cached.invalidate_all();
    }

    #[tokio::test]
    async fn repeated_reference_fetches_hit_the_cache() {
        let cached = cached_mock();

        let first = cached.routes().await.unwrap();
        let second = cached.routes().await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(cached.client().route_calls(), 1);

        cached.directions(&blue()).await.unwrap();
        cached.directions(&blue()).await.unwrap();
        assert_eq!(cached.client().direction_calls(), 1);

        cached.stops(&blue(), &DirectionCode::SOUTH).await.unwrap();
        cached.stops(&blue(), &DirectionCode::SOUTH).await.unwrap();
        assert_eq!(cached.client().stop_calls(), 1);
    }

    #[tokio::test]
    async fn departures_are_never_cached() {
        let cached = cached_mock();

        cached
            .departures(&blue(), &DirectionCode::SOUTH, &mall())
            .await
            .unwrap();
        cached
            .departures(&blue(), &DirectionCode::SOUTH, &mall())
            .await
            .unwrap();

        assert_eq!(cached.client().departure_calls(), 2);
    }

    #[tokio::test]
    async fn invalidation_forces_a_refetch() {
        let cached = cached_mock();

        cached.routes().await.unwrap();
        cached.invalidate_all();
        cached.routes().await.unwrap();

        assert_eq!(cached.client().route_calls(), 2);
    }

    #[tokio::test]
    async fn failed_fetches_are_not_cached() {
        let mock = MockTransit::new().failing_directions();
        let cached = CachedTransit::new(mock, &CacheConfig::default());

        assert!(cached.directions(&blue()).await.is_err());
        assert!(cached.directions(&blue()).await.is_err());

        assert_eq!(cached.client().direction_calls(), 2);
    }
}
