//! Dataset records

use gv_core::Measure;
use serde::{Deserialize, Serialize};

/// One observation for a country in a given year.
///
/// Field names follow the upstream gapminder CSV headers so records
/// round-trip through serde without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: i32,
    #[serde(rename = "pop")]
    pub population: f64,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
}

impl Record {
    /// The value of the given measure for this record.
    pub fn measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Population => self.population,
            Measure::LifeExp => self.life_exp,
            Measure::GdpPercap => self.gdp_percap,
        }
    }
}
