// Regional intensity endpoints
//
// Per-DNO-region intensity and generation mix. The national snapshot
// (/regional) groups regions under one time window; the country, postcode,
// and region-id lookups return one region with a time series.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::schema::{DataEnvelope, RegionalFromTo, RegionalId, RegionalResponse};

/// Upstream defines DNO region ids 1 through 17.
const REGION_ID_RANGE: std::ops::RangeInclusive<u16> = 1..=17;

impl Client {
    /// Current intensity and mix for all DNO regions.
    ///
    /// `GET /regional`
    pub async fn current_regional(&self) -> Result<Vec<RegionalFromTo>, Error> {
        let url = self.endpoint(&["regional"])?;
        Ok(self.get::<RegionalResponse>(url).await?.data)
    }

    /// Current intensity and mix for England.
    ///
    /// `GET /regional/england`
    pub async fn regional_england(&self) -> Result<Vec<RegionalId>, Error> {
        self.regional_country("england").await
    }

    /// Current intensity and mix for Scotland.
    ///
    /// `GET /regional/scotland`
    pub async fn regional_scotland(&self) -> Result<Vec<RegionalId>, Error> {
        self.regional_country("scotland").await
    }

    /// Current intensity and mix for Wales.
    ///
    /// `GET /regional/wales`
    pub async fn regional_wales(&self) -> Result<Vec<RegionalId>, Error> {
        self.regional_country("wales").await
    }

    /// Current intensity and mix for the region serving a postcode.
    ///
    /// `GET /regional/postcode/{postcode}`
    ///
    /// Takes the outward portion only (e.g. `RG10`, not `RG10 9NY`).
    pub async fn regional_postcode(&self, postcode: &str) -> Result<Vec<RegionalId>, Error> {
        let postcode = postcode.trim();
        if postcode.is_empty() {
            return Err(Error::InvalidArgument("postcode is empty".to_owned()));
        }
        if postcode.contains(char::is_whitespace) {
            return Err(Error::InvalidArgument(format!(
                "postcode must be the outward code only, got {postcode:?}"
            )));
        }
        debug!(postcode, "fetching regional intensity by postcode");
        let url = self.endpoint(&["regional", "postcode", postcode])?;
        Ok(self.get::<DataEnvelope<Vec<RegionalId>>>(url).await?.data)
    }

    /// Current intensity and mix for one DNO region by id.
    ///
    /// `GET /regional/regionid/{regionid}`
    pub async fn regional_region_id(&self, region_id: u16) -> Result<Vec<RegionalId>, Error> {
        if !REGION_ID_RANGE.contains(&region_id) {
            return Err(Error::InvalidArgument(format!(
                "region id must be in 1..=17, got {region_id}"
            )));
        }
        let url = self.endpoint(&["regional", "regionid", &region_id.to_string()])?;
        Ok(self.get::<DataEnvelope<Vec<RegionalId>>>(url).await?.data)
    }

    async fn regional_country(&self, country: &str) -> Result<Vec<RegionalId>, Error> {
        let url = self.endpoint(&["regional", country])?;
        Ok(self.get::<DataEnvelope<Vec<RegionalId>>>(url).await?.data)
    }
}
