// gridcarbon: Rust client for the UK National Grid Carbon Intensity API
// (async, with a blocking wrapper under `blocking`)

pub mod blocking;
pub mod client;
pub mod error;
pub mod schema;
pub mod transport;

mod time;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::Error;
pub use schema::{
    FuelType, GenerationData, IntensityData, IntensityIndex, IntensityValue, RegionalFromTo,
    RegionalId, StatisticsData,
};
pub use transport::TransportConfig;
