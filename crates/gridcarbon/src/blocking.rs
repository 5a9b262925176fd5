// Blocking surface
//
// Thin wrapper that owns an async [`Client`](crate::Client) plus a
// current-thread tokio runtime and drives each call to completion, so URL
// construction and response decoding exist exactly once. Same approach
// reqwest takes for its own blocking module.
//
// Must not be used from within an async context -- `block_on` would panic.

use chrono::{DateTime, NaiveDate, Utc};
use tokio::runtime::Runtime;

use crate::error::Error;
use crate::schema::{
    FactorsData, GenerationData, IntensityData, RegionalFromTo, RegionalId, StatisticsData,
};
use crate::transport::TransportConfig;

/// Blocking client for the UK National Grid Carbon Intensity API.
///
/// Every method mirrors the async [`Client`](crate::Client) method of the
/// same name. The owned runtime and connection pool are released on drop.
#[derive(Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Create a blocking client against the production API.
    pub fn new() -> Result<Self, Error> {
        Self::wrap(crate::Client::new()?)
    }

    /// Create a blocking client against a different base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::wrap(crate::Client::with_base_url(base_url)?)
    }

    /// Create a blocking client with explicit transport settings.
    pub fn with_transport(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Self::wrap(crate::Client::with_transport(base_url, transport)?)
    }

    fn wrap(inner: crate::Client) -> Result<Self, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    // ── National intensity ───────────────────────────────────────────

    /// Blocking variant of [`Client::current_intensity`](crate::Client::current_intensity).
    pub fn current_intensity(&self) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.current_intensity())
    }

    /// Blocking variant of [`Client::intensity_today`](crate::Client::intensity_today).
    pub fn intensity_today(&self) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_today())
    }

    /// Blocking variant of [`Client::intensity_for_date`](crate::Client::intensity_for_date).
    pub fn intensity_for_date(&self, date: NaiveDate) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_for_date(date))
    }

    /// Blocking variant of
    /// [`Client::intensity_for_date_period`](crate::Client::intensity_for_date_period).
    pub fn intensity_for_date_period(
        &self,
        date: NaiveDate,
        period: u8,
    ) -> Result<Vec<IntensityData>, Error> {
        self.runtime
            .block_on(self.inner.intensity_for_date_period(date, period))
    }

    /// Blocking variant of [`Client::intensity_at`](crate::Client::intensity_at).
    pub fn intensity_at(&self, at: DateTime<Utc>) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_at(at))
    }

    /// Blocking variant of [`Client::intensity_between`](crate::Client::intensity_between).
    pub fn intensity_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_between(from, to))
    }

    /// Blocking variant of
    /// [`Client::intensity_forward_24h`](crate::Client::intensity_forward_24h).
    pub fn intensity_forward_24h(&self, from: DateTime<Utc>) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_forward_24h(from))
    }

    /// Blocking variant of
    /// [`Client::intensity_forward_48h`](crate::Client::intensity_forward_48h).
    pub fn intensity_forward_48h(&self, from: DateTime<Utc>) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_forward_48h(from))
    }

    /// Blocking variant of
    /// [`Client::intensity_past_24h`](crate::Client::intensity_past_24h).
    pub fn intensity_past_24h(&self, from: DateTime<Utc>) -> Result<Vec<IntensityData>, Error> {
        self.runtime.block_on(self.inner.intensity_past_24h(from))
    }

    /// Blocking variant of [`Client::intensity_factors`](crate::Client::intensity_factors).
    pub fn intensity_factors(&self) -> Result<Vec<FactorsData>, Error> {
        self.runtime.block_on(self.inner.intensity_factors())
    }

    /// Blocking variant of [`Client::intensity_stats`](crate::Client::intensity_stats).
    pub fn intensity_stats(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatisticsData>, Error> {
        self.runtime.block_on(self.inner.intensity_stats(from, to))
    }

    /// Blocking variant of
    /// [`Client::intensity_stats_blocks`](crate::Client::intensity_stats_blocks).
    pub fn intensity_stats_blocks(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        block_hours: u8,
    ) -> Result<Vec<StatisticsData>, Error> {
        self.runtime
            .block_on(self.inner.intensity_stats_blocks(from, to, block_hours))
    }

    // ── Generation mix ───────────────────────────────────────────────

    /// Blocking variant of [`Client::current_generation`](crate::Client::current_generation).
    pub fn current_generation(&self) -> Result<GenerationData, Error> {
        self.runtime.block_on(self.inner.current_generation())
    }

    /// Blocking variant of
    /// [`Client::generation_past_24h`](crate::Client::generation_past_24h).
    pub fn generation_past_24h(&self, from: DateTime<Utc>) -> Result<Vec<GenerationData>, Error> {
        self.runtime.block_on(self.inner.generation_past_24h(from))
    }

    /// Blocking variant of [`Client::generation_between`](crate::Client::generation_between).
    pub fn generation_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<GenerationData>, Error> {
        self.runtime
            .block_on(self.inner.generation_between(from, to))
    }

    // ── Regional ─────────────────────────────────────────────────────

    /// Blocking variant of [`Client::current_regional`](crate::Client::current_regional).
    pub fn current_regional(&self) -> Result<Vec<RegionalFromTo>, Error> {
        self.runtime.block_on(self.inner.current_regional())
    }

    /// Blocking variant of [`Client::regional_england`](crate::Client::regional_england).
    pub fn regional_england(&self) -> Result<Vec<RegionalId>, Error> {
        self.runtime.block_on(self.inner.regional_england())
    }

    /// Blocking variant of [`Client::regional_scotland`](crate::Client::regional_scotland).
    pub fn regional_scotland(&self) -> Result<Vec<RegionalId>, Error> {
        self.runtime.block_on(self.inner.regional_scotland())
    }

    /// Blocking variant of [`Client::regional_wales`](crate::Client::regional_wales).
    pub fn regional_wales(&self) -> Result<Vec<RegionalId>, Error> {
        self.runtime.block_on(self.inner.regional_wales())
    }

    /// Blocking variant of [`Client::regional_postcode`](crate::Client::regional_postcode).
    pub fn regional_postcode(&self, postcode: &str) -> Result<Vec<RegionalId>, Error> {
        self.runtime.block_on(self.inner.regional_postcode(postcode))
    }

    /// Blocking variant of [`Client::regional_region_id`](crate::Client::regional_region_id).
    pub fn regional_region_id(&self, region_id: u16) -> Result<Vec<RegionalId>, Error> {
        self.runtime
            .block_on(self.inner.regional_region_id(region_id))
    }
}
