// Generation mix endpoints
//
// Percentage breakdown of GB electricity generation by fuel type. Note the
// asymmetric envelope: /generation wraps a single object, the ranged
// variants wrap a list.

use chrono::{DateTime, Utc};

use crate::client::{Client, check_range};
use crate::error::Error;
use crate::schema::{DataEnvelope, GenerationData, GenerationResponse};
use crate::time::datetime_path;

impl Client {
    /// Generation mix for the current half-hour.
    ///
    /// `GET /generation`
    pub async fn current_generation(&self) -> Result<GenerationData, Error> {
        let url = self.endpoint(&["generation"])?;
        Ok(self.get::<GenerationResponse>(url).await?.data)
    }

    /// Generation mix for the 24 hours preceding the given instant.
    ///
    /// `GET /generation/{from}/pt24h`
    pub async fn generation_past_24h(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<GenerationData>, Error> {
        let url = self.endpoint(&["generation", &datetime_path(from), "pt24h"])?;
        Ok(self.get::<DataEnvelope<Vec<GenerationData>>>(url).await?.data)
    }

    /// Generation mix for every period between the two instants.
    ///
    /// `GET /generation/{from}/{to}`
    pub async fn generation_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<GenerationData>, Error> {
        check_range(from, to)?;
        let url = self.endpoint(&["generation", &datetime_path(from), &datetime_path(to)])?;
        Ok(self.get::<DataEnvelope<Vec<GenerationData>>>(url).await?.data)
    }
}
