//! Asynchronous journey source with simulated network latency.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::{Journey, StationId};
use crate::stations::StationCatalog;

use super::config::GeneratorConfig;
use super::departures::Departure;
use super::journeys::JourneyGenerator;

/// Trait for providing journeys and departure boards.
///
/// This abstraction lets the web layer be driven by any data source. The
/// returned futures carry no cancellation contract: a caller that stops
/// waiting simply drops the future, and may wrap calls in its own timeout.
pub trait JourneyProvider {
    /// Journeys from `from` to `to` departing after `when` (default now).
    fn journeys(
        &self,
        from: &StationId,
        to: &StationId,
        when: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Vec<Journey>> + Send;

    /// Departure board for `station` after `when` (default now).
    fn departures(
        &self,
        station: &StationId,
        when: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Vec<Departure>> + Send;
}

/// Provider that fabricates data locally after an artificial delay.
pub struct SimulatedProvider {
    catalog: Arc<StationCatalog>,
    config: Arc<GeneratorConfig>,
    rng: Mutex<StdRng>,
}

impl SimulatedProvider {
    /// Create a provider seeded from system entropy.
    pub fn new(catalog: Arc<StationCatalog>, config: Arc<GeneratorConfig>) -> Self {
        Self {
            catalog,
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a provider with a fixed seed, for reproducible output.
    pub fn with_seed(catalog: Arc<StationCatalog>, config: Arc<GeneratorConfig>, seed: u64) -> Self {
        Self {
            catalog,
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The station catalog this provider resolves against.
    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }

    /// The generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Sleep for a random time within the configured latency window.
    async fn simulate_latency(&self) {
        let latency = {
            let mut rng = self.rng.lock().await;
            latency(&mut *rng, &self.config)
        };

        if !latency.is_zero() {
            debug!(latency_ms = latency.as_millis() as u64, "simulating latency");
            tokio::time::sleep(latency).await;
        }
    }
}

impl JourneyProvider for SimulatedProvider {
    async fn journeys(
        &self,
        from: &StationId,
        to: &StationId,
        when: Option<DateTime<Utc>>,
    ) -> Vec<Journey> {
        info!(from = %from, to = %to, "searching for journeys");
        let reference = when.unwrap_or_else(Utc::now);

        self.simulate_latency().await;

        let mut rng = self.rng.lock().await;
        JourneyGenerator::new(&self.catalog, &self.config).generate(
            from.as_str(),
            to.as_str(),
            reference,
            &mut *rng,
        )
    }

    async fn departures(&self, station: &StationId, when: Option<DateTime<Utc>>) -> Vec<Departure> {
        info!(station = %station, "fetching departures");
        let reference = when.unwrap_or_else(Utc::now);

        self.simulate_latency().await;

        let mut rng = self.rng.lock().await;
        JourneyGenerator::new(&self.catalog, &self.config).departures(
            station.as_str(),
            reference,
            &mut *rng,
        )
    }
}

/// Draw a latency uniformly from the configured window.
fn latency<R: Rng + ?Sized>(rng: &mut R, config: &GeneratorConfig) -> Duration {
    let min = config.latency_min.as_millis() as u64;
    let max = config.latency_max.as_millis() as u64;

    if max <= min {
        return Duration::from_millis(min);
    }

    Duration::from_millis(rng.gen_range(min..=max))
}
