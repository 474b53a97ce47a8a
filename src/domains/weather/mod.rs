//! Weather domain module.
//!
//! Holds the immutable weather catalog that the `get_weather` tool reads.

mod catalog;

pub use catalog::{WeatherCatalog, WeatherReading};
