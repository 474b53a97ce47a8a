//! The weather catalog: a read-only city lookup table.
//!
//! The catalog is constructed once, carried inside the server configuration,
//! and never mutated afterwards. Lookups are case-insensitive; unknown
//! cities degrade to a placeholder reading instead of an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single weather observation for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in degrees Celsius.
    pub temperature: i32,

    /// Short condition description (e.g., "cloudy").
    pub condition: String,
}

impl WeatherReading {
    pub fn new(temperature: i32, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            condition: condition.into(),
        }
    }
}

/// Immutable mapping from lower-cased city name to its weather reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCatalog {
    /// Known readings, keyed by normalized city name.
    entries: HashMap<String, WeatherReading>,

    /// Reading returned when a city is not in the table.
    fallback: WeatherReading,
}

impl WeatherCatalog {
    /// Build a catalog from (city, reading) pairs and a fallback reading.
    ///
    /// Keys are normalized to lower case on insertion, so lookups match
    /// regardless of the caller's casing.
    pub fn new<I>(entries: I, fallback: WeatherReading) -> Self
    where
        I: IntoIterator<Item = (String, WeatherReading)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(city, reading)| (city.to_lowercase(), reading))
                .collect(),
            fallback,
        }
    }

    /// Look up the reading for a city, case-insensitively.
    ///
    /// Unknown cities get the fallback reading; this never fails.
    pub fn reading_for(&self, city: &str) -> WeatherReading {
        self.entries
            .get(&city.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }

    /// Number of cities in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WeatherCatalog {
    fn default() -> Self {
        Self::new(
            [
                ("london".to_string(), WeatherReading::new(15, "cloudy")),
                ("paris".to_string(), WeatherReading::new(18, "sunny")),
                ("tokyo".to_string(), WeatherReading::new(22, "rainy")),
                ("new york".to_string(), WeatherReading::new(12, "windy")),
            ],
            WeatherReading::new(20, "unknown"),
        )
    }
}
