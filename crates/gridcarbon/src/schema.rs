// Response types for the Carbon Intensity API.
//
// Every model mirrors one JSON shape from api.carbonintensity.org.uk and is
// validated at construction: closed enum sets reject unseen values, timestamps
// must parse, and period-bearing models enforce `from <= to` through
// `try_from` shadow structs. An invalid body never produces a live instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

// ── Validation ───────────────────────────────────────────────────────

/// Construction-time validation failure, naming the offending field.
///
/// Surfaces through serde as a deserialization error, so callers see it
/// inside [`Error::Deserialization`](crate::Error::Deserialization).
#[derive(Debug, Clone, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

fn check_period(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<(), ValidationError> {
    if from > to {
        return Err(ValidationError {
            field: "from/to",
            message: format!("period start {from} is after end {to}"),
        });
    }
    Ok(())
}

/// The API occasionally reports mixes that stray from the ideal bounds.
/// Those are flagged, not rejected -- the values are preserved as-is.
fn flag_generation_mix(mix: &[FuelMix]) {
    if !mix.is_empty() {
        let total: f64 = mix.iter().map(|entry| entry.perc).sum();
        if (total - 100.0).abs() > 1.0 {
            warn!(total, "generation mix percentages sum away from 100");
        }
    }
    for entry in mix {
        if !(0.0..=100.0).contains(&entry.perc) {
            warn!(fuel = %entry.fuel, perc = entry.perc, "fuel percentage outside 0-100");
        }
    }
}

// ── Enums ────────────────────────────────────────────────────────────

/// Carbon intensity index band.
///
/// Closed set: the upstream API is the sole source of truth for these
/// values, and anything unseen fails decoding rather than coercing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityIndex {
    #[serde(rename = "very low")]
    VeryLow,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl IntensityIndex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

impl std::fmt::Display for IntensityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fuel category in a generation mix. Closed set, like [`IntensityIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gas,
    Coal,
    Nuclear,
    Wind,
    Solar,
    Hydro,
    Biomass,
    Imports,
    Other,
    Storage,
}

impl FuelType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Coal => "coal",
            Self::Nuclear => "nuclear",
            Self::Wind => "wind",
            Self::Solar => "solar",
            Self::Hydro => "hydro",
            Self::Biomass => "biomass",
            Self::Imports => "imports",
            Self::Other => "other",
            Self::Storage => "storage",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Nested models ────────────────────────────────────────────────────

/// Forecast/actual intensity pair with its index band, in gCO2/kWh.
///
/// Negative values are valid -- they represent net export. `actual` is
/// absent for future periods and for all regional data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityValue {
    pub forecast: i32,
    #[serde(default)]
    pub actual: Option<i32>,
    pub index: IntensityIndex,
}

/// One fuel's percentage contribution to a generation mix.
///
/// `perc` is kept exactly as reported, even outside [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelMix {
    pub fuel: FuelType,
    pub perc: f64,
}

/// Aggregated intensity over a requested range, from the stats endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsIntensity {
    pub max: i32,
    pub average: f64,
    pub min: i32,
    pub index: IntensityIndex,
}

// ── Data models ──────────────────────────────────────────────────────

/// Carbon intensity for one half-hour settlement period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntensityDataRaw")]
pub struct IntensityData {
    #[serde(with = "crate::time::timestamp")]
    pub from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub to: DateTime<Utc>,
    pub intensity: IntensityValue,
}

#[derive(Deserialize)]
struct IntensityDataRaw {
    #[serde(with = "crate::time::timestamp")]
    from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    to: DateTime<Utc>,
    intensity: IntensityValue,
}

impl TryFrom<IntensityDataRaw> for IntensityData {
    type Error = ValidationError;

    fn try_from(raw: IntensityDataRaw) -> Result<Self, Self::Error> {
        check_period(raw.from, raw.to)?;
        Ok(Self {
            from: raw.from,
            to: raw.to,
            intensity: raw.intensity,
        })
    }
}

/// Generation mix for one period. Fuel ordering is preserved as reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GenerationDataRaw")]
pub struct GenerationData {
    #[serde(with = "crate::time::timestamp")]
    pub from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub to: DateTime<Utc>,
    pub generationmix: Vec<FuelMix>,
}

#[derive(Deserialize)]
struct GenerationDataRaw {
    #[serde(with = "crate::time::timestamp")]
    from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    to: DateTime<Utc>,
    generationmix: Vec<FuelMix>,
}

impl TryFrom<GenerationDataRaw> for GenerationData {
    type Error = ValidationError;

    fn try_from(raw: GenerationDataRaw) -> Result<Self, Self::Error> {
        check_period(raw.from, raw.to)?;
        flag_generation_mix(&raw.generationmix);
        Ok(Self {
            from: raw.from,
            to: raw.to,
            generationmix: raw.generationmix,
        })
    }
}

/// Intensity statistics over one block of a requested range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StatisticsDataRaw")]
pub struct StatisticsData {
    #[serde(with = "crate::time::timestamp")]
    pub from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub to: DateTime<Utc>,
    pub intensity: StatisticsIntensity,
}

#[derive(Deserialize)]
struct StatisticsDataRaw {
    #[serde(with = "crate::time::timestamp")]
    from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    to: DateTime<Utc>,
    intensity: StatisticsIntensity,
}

impl TryFrom<StatisticsDataRaw> for StatisticsData {
    type Error = ValidationError;

    fn try_from(raw: StatisticsDataRaw) -> Result<Self, Self::Error> {
        check_period(raw.from, raw.to)?;
        Ok(Self {
            from: raw.from,
            to: raw.to,
            intensity: raw.intensity,
        })
    }
}

/// Static carbon intensity factors per fuel, in gCO2/kWh.
///
/// Upstream names the fields with capitals and spaces; fuels added later
/// land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorsData {
    #[serde(rename = "Biomass", default)]
    pub biomass: Option<i32>,
    #[serde(rename = "Coal", default)]
    pub coal: Option<i32>,
    #[serde(rename = "Dutch Imports", default)]
    pub dutch_imports: Option<i32>,
    #[serde(rename = "French Imports", default)]
    pub french_imports: Option<i32>,
    #[serde(rename = "Gas (Combined Cycle)", default)]
    pub gas_combined_cycle: Option<i32>,
    #[serde(rename = "Gas (Open Cycle)", default)]
    pub gas_open_cycle: Option<i32>,
    #[serde(rename = "Hydro", default)]
    pub hydro: Option<i32>,
    #[serde(rename = "Irish Imports", default)]
    pub irish_imports: Option<i32>,
    #[serde(rename = "Nuclear", default)]
    pub nuclear: Option<i32>,
    #[serde(rename = "Oil", default)]
    pub oil: Option<i32>,
    #[serde(rename = "Other", default)]
    pub other: Option<i32>,
    #[serde(rename = "Pumped Storage", default)]
    pub pumped_storage: Option<i32>,
    #[serde(rename = "Solar", default)]
    pub solar: Option<i32>,
    #[serde(rename = "Wind", default)]
    pub wind: Option<i32>,
    /// Catch-all for fuels not modeled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Regional models ──────────────────────────────────────────────────

/// One region's intensity and mix inside a national snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalIntensityData {
    pub regionid: u16,
    #[serde(default)]
    pub dnoregion: Option<String>,
    pub shortname: String,
    pub intensity: IntensityValue,
    pub generationmix: Vec<FuelMix>,
}

/// One period of intensity and mix within a region-scoped series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegionalDataPointRaw")]
pub struct RegionalDataPoint {
    #[serde(with = "crate::time::timestamp")]
    pub from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub to: DateTime<Utc>,
    pub intensity: IntensityValue,
    pub generationmix: Vec<FuelMix>,
}

#[derive(Deserialize)]
struct RegionalDataPointRaw {
    #[serde(with = "crate::time::timestamp")]
    from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    to: DateTime<Utc>,
    intensity: IntensityValue,
    generationmix: Vec<FuelMix>,
}

impl TryFrom<RegionalDataPointRaw> for RegionalDataPoint {
    type Error = ValidationError;

    fn try_from(raw: RegionalDataPointRaw) -> Result<Self, Self::Error> {
        check_period(raw.from, raw.to)?;
        flag_generation_mix(&raw.generationmix);
        Ok(Self {
            from: raw.from,
            to: raw.to,
            intensity: raw.intensity,
            generationmix: raw.generationmix,
        })
    }
}

/// All DNO regions for one time window, from `GET /regional`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegionalFromToRaw")]
pub struct RegionalFromTo {
    #[serde(with = "crate::time::timestamp")]
    pub from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub to: DateTime<Utc>,
    pub regions: Vec<RegionalIntensityData>,
}

#[derive(Deserialize)]
struct RegionalFromToRaw {
    #[serde(with = "crate::time::timestamp")]
    from: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    to: DateTime<Utc>,
    regions: Vec<RegionalIntensityData>,
}

impl TryFrom<RegionalFromToRaw> for RegionalFromTo {
    type Error = ValidationError;

    fn try_from(raw: RegionalFromToRaw) -> Result<Self, Self::Error> {
        check_period(raw.from, raw.to)?;
        Ok(Self {
            from: raw.from,
            to: raw.to,
            regions: raw.regions,
        })
    }
}

/// One region's time series, from the country, postcode, and region-id
/// endpoints. `postcode` is only present on postcode lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalId {
    pub regionid: u16,
    #[serde(default)]
    pub dnoregion: Option<String>,
    pub shortname: String,
    #[serde(default)]
    pub postcode: Option<String>,
    pub data: Vec<RegionalDataPoint>,
}

// ── Envelopes ────────────────────────────────────────────────────────

/// Generic `{ "data": ... }` wrapper every successful response carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

pub type IntensityResponse = DataEnvelope<Vec<IntensityData>>;
/// The current-mix endpoint returns a single object; ranged generation
/// endpoints return `DataEnvelope<Vec<GenerationData>>`.
pub type GenerationResponse = DataEnvelope<GenerationData>;
pub type RegionalResponse = DataEnvelope<Vec<RegionalFromTo>>;
pub type StatisticsResponse = DataEnvelope<Vec<StatisticsData>>;
pub type FactorsResponse = DataEnvelope<Vec<FactorsData>>;

/// Error envelope the API returns on failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Upstream error code and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn intensity_json() -> serde_json::Value {
        json!({
            "from": "2018-01-20T12:00Z",
            "to": "2018-01-20T12:30Z",
            "intensity": { "forecast": 266, "actual": 263, "index": "moderate" }
        })
    }

    #[test]
    fn decodes_intensity_data() {
        let data: IntensityData = serde_json::from_value(intensity_json()).unwrap();
        assert_eq!(data.intensity.forecast, 266);
        assert_eq!(data.intensity.actual, Some(263));
        assert_eq!(data.intensity.index, IntensityIndex::Moderate);
        assert_eq!((data.to - data.from).num_minutes(), 30);
    }

    #[test]
    fn round_trip_is_stable() {
        let first: IntensityData = serde_json::from_value(intensity_json()).unwrap();
        let encoded = serde_json::to_string(&first).unwrap();
        let second: IntensityData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_unknown_index() {
        let mut body = intensity_json();
        body["intensity"]["index"] = json!("ultra high");
        let err = serde_json::from_value::<IntensityData>(body).unwrap_err();
        assert!(err.to_string().contains("unknown variant"), "{err}");
    }

    #[test]
    fn rejects_inverted_period() {
        let body = json!({
            "from": "2018-01-20T12:30Z",
            "to": "2018-01-20T12:00Z",
            "intensity": { "forecast": 100, "actual": null, "index": "low" }
        });
        let err = serde_json::from_value::<IntensityData>(body).unwrap_err();
        assert!(err.to_string().contains("from/to"), "{err}");
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let mut body = intensity_json();
        body["from"] = json!("20th of January");
        assert!(serde_json::from_value::<IntensityData>(body).is_err());
    }

    #[test]
    fn rejects_missing_forecast() {
        let body = json!({
            "from": "2018-01-20T12:00Z",
            "to": "2018-01-20T12:30Z",
            "intensity": { "actual": 263, "index": "moderate" }
        });
        let err = serde_json::from_value::<IntensityData>(body).unwrap_err();
        assert!(err.to_string().contains("forecast"), "{err}");
    }

    #[test]
    fn negative_intensity_is_valid() {
        let mut body = intensity_json();
        body["intensity"]["forecast"] = json!(-12);
        let data: IntensityData = serde_json::from_value(body).unwrap();
        assert_eq!(data.intensity.forecast, -12);
    }

    #[test]
    fn generation_mix_preserves_order_and_values() {
        let body = json!({
            "from": "2018-01-20T12:00Z",
            "to": "2018-01-20T12:30Z",
            "generationmix": [
                { "fuel": "wind", "perc": 48.1 },
                { "fuel": "gas", "perc": 103.2 },
                { "fuel": "coal", "perc": 0.0 }
            ]
        });
        let data: GenerationData = serde_json::from_value(body).unwrap();
        let fuels: Vec<FuelType> = data.generationmix.iter().map(|m| m.fuel).collect();
        assert_eq!(fuels, vec![FuelType::Wind, FuelType::Gas, FuelType::Coal]);
        // Out-of-range percentages are preserved, not clamped.
        assert_eq!(data.generationmix[1].perc, 103.2);
    }

    #[test]
    fn rejects_unknown_fuel() {
        let body = json!({
            "from": "2018-01-20T12:00Z",
            "to": "2018-01-20T12:30Z",
            "generationmix": [{ "fuel": "fusion", "perc": 100.0 }]
        });
        assert!(serde_json::from_value::<GenerationData>(body).is_err());
    }

    #[test]
    fn decodes_factors_with_extra_fuels() {
        let body = json!({
            "Biomass": 120,
            "Coal": 937,
            "Dutch Imports": 474,
            "French Imports": 53,
            "Gas (Combined Cycle)": 394,
            "Gas (Open Cycle)": 651,
            "Hydro": 0,
            "Irish Imports": 458,
            "Nuclear": 0,
            "Oil": 935,
            "Other": 300,
            "Pumped Storage": 0,
            "Solar": 0,
            "Wind": 0,
            "Tidal": 17
        });
        let factors: FactorsData = serde_json::from_value(body).unwrap();
        assert_eq!(factors.coal, Some(937));
        assert_eq!(factors.extra.get("Tidal"), Some(&json!(17)));
    }

    #[test]
    fn decodes_regional_snapshot() {
        let body = json!({
            "from": "2018-05-15T12:00Z",
            "to": "2018-05-15T12:30Z",
            "regions": [{
                "regionid": 1,
                "dnoregion": "Scottish Hydro Electric Power Distribution",
                "shortname": "North Scotland",
                "intensity": { "forecast": 21, "index": "very low" },
                "generationmix": [{ "fuel": "hydro", "perc": 100.0 }]
            }]
        });
        let window: RegionalFromTo = serde_json::from_value(body).unwrap();
        assert_eq!(window.regions.len(), 1);
        assert_eq!(window.regions[0].intensity.actual, None);
        assert_eq!(window.regions[0].intensity.index, IntensityIndex::VeryLow);
    }

    #[test]
    fn index_and_fuel_display() {
        assert_eq!(IntensityIndex::VeryHigh.to_string(), "very high");
        assert_eq!(FuelType::Storage.to_string(), "storage");
    }
}
