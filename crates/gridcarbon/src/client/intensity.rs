// National intensity endpoints
//
// Half-hourly carbon intensity for Great Britain as a whole, plus the
// statistics and static-factors endpoints that hang off /intensity.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::client::{Client, check_range};
use crate::error::Error;
use crate::schema::{
    FactorsData, FactorsResponse, IntensityData, IntensityResponse, StatisticsData,
    StatisticsResponse,
};
use crate::time::{date_path, datetime_path};

impl Client {
    /// Carbon intensity for the current half-hour settlement period.
    ///
    /// `GET /intensity`
    pub async fn current_intensity(&self) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity"])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// All settlement periods of today.
    ///
    /// `GET /intensity/date`
    pub async fn intensity_today(&self) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity", "date"])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// All settlement periods of the given date.
    ///
    /// `GET /intensity/date/{date}`
    pub async fn intensity_for_date(&self, date: NaiveDate) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity", "date", &date_path(date)])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// One settlement period of the given date.
    ///
    /// `GET /intensity/date/{date}/{period}`
    ///
    /// The day splits into 48 half-hour settlement periods; `period` must be
    /// in `1..=48`.
    pub async fn intensity_for_date_period(
        &self,
        date: NaiveDate,
        period: u8,
    ) -> Result<Vec<IntensityData>, Error> {
        if !(1..=48).contains(&period) {
            return Err(Error::InvalidArgument(format!(
                "settlement period must be in 1..=48, got {period}"
            )));
        }
        debug!(%date, period, "fetching settlement period intensity");
        let url = self.endpoint(&["intensity", "date", &date_path(date), &period.to_string()])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// The half-hour period containing the given instant.
    ///
    /// `GET /intensity/{from}`
    pub async fn intensity_at(&self, at: DateTime<Utc>) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity", &datetime_path(at)])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// All periods between the two instants (maximum date range is limited
    /// upstream to 14 days).
    ///
    /// `GET /intensity/{from}/{to}`
    pub async fn intensity_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<IntensityData>, Error> {
        check_range(from, to)?;
        let url = self.endpoint(&["intensity", &datetime_path(from), &datetime_path(to)])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// 24 hours of forecast periods following the given instant.
    ///
    /// `GET /intensity/{from}/fw24h`
    pub async fn intensity_forward_24h(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity", &datetime_path(from), "fw24h"])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// 48 hours of forecast periods following the given instant.
    ///
    /// `GET /intensity/{from}/fw48h`
    pub async fn intensity_forward_48h(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity", &datetime_path(from), "fw48h"])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// The 24 hours of periods preceding the given instant.
    ///
    /// `GET /intensity/{from}/pt24h`
    pub async fn intensity_past_24h(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<IntensityData>, Error> {
        let url = self.endpoint(&["intensity", &datetime_path(from), "pt24h"])?;
        Ok(self.get::<IntensityResponse>(url).await?.data)
    }

    /// Static carbon intensity factors per fuel type.
    ///
    /// `GET /intensity/factors`
    pub async fn intensity_factors(&self) -> Result<Vec<FactorsData>, Error> {
        let url = self.endpoint(&["intensity", "factors"])?;
        Ok(self.get::<FactorsResponse>(url).await?.data)
    }

    /// Max/average/min intensity over the given range.
    ///
    /// `GET /intensity/stats/{from}/{to}`
    pub async fn intensity_stats(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<StatisticsData>, Error> {
        check_range(from, to)?;
        let url =
            self.endpoint(&["intensity", "stats", &datetime_path(from), &datetime_path(to)])?;
        Ok(self.get::<StatisticsResponse>(url).await?.data)
    }

    /// Statistics split into blocks of `block_hours` hours (upstream allows
    /// 1 to 24).
    ///
    /// `GET /intensity/stats/{from}/{to}/{block}`
    pub async fn intensity_stats_blocks(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        block_hours: u8,
    ) -> Result<Vec<StatisticsData>, Error> {
        if !(1..=24).contains(&block_hours) {
            return Err(Error::InvalidArgument(format!(
                "statistics block length must be in 1..=24 hours, got {block_hours}"
            )));
        }
        check_range(from, to)?;
        let url = self.endpoint(&[
            "intensity",
            "stats",
            &datetime_path(from),
            &datetime_path(to),
            &block_hours.to_string(),
        ])?;
        Ok(self.get::<StatisticsResponse>(url).await?.data)
    }
}
