//! Measures: the numeric fields a view can display

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The numeric field a view currently displays.
///
/// Dropdowns and axis selects carry these as the upstream column names
/// (`pop`, `lifeExp`, `gdpPercap`); parsing an unrecognized name is a
/// configuration error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    /// Total population
    Population,
    /// Life expectancy at birth, in years
    LifeExp,
    /// GDP per capita
    GdpPercap,
}

impl Measure {
    /// All measures, in the order the dropdowns list them.
    pub const ALL: [Measure; 3] = [Measure::Population, Measure::LifeExp, Measure::GdpPercap];

    /// The upstream column name for this measure.
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Population => "pop",
            Measure::LifeExp => "lifeExp",
            Measure::GdpPercap => "gdpPercap",
        }
    }
}

impl std::str::FromStr for Measure {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pop" => Ok(Measure::Population),
            "lifeExp" => Ok(Measure::LifeExp),
            "gdpPercap" => Ok(Measure::GdpPercap),
            other => Err(ConfigError::UnknownMeasure(other.to_string())),
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_measures() {
        assert_eq!("pop".parse::<Measure>(), Ok(Measure::Population));
        assert_eq!("lifeExp".parse::<Measure>(), Ok(Measure::LifeExp));
        assert_eq!("gdpPercap".parse::<Measure>(), Ok(Measure::GdpPercap));
    }

    #[test]
    fn test_parse_unknown_measure_fails() {
        let err = "life_exp".parse::<Measure>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownMeasure("life_exp".to_string()));
    }

    #[test]
    fn test_round_trip_through_name() {
        for measure in Measure::ALL {
            assert_eq!(measure.as_str().parse::<Measure>(), Ok(measure));
        }
    }
}
