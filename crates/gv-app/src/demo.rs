//! Demo dataset
//!
//! A small gapminder-shaped dataset so the dashboard can run without a
//! loader. Figures are rounded from the public gapminder extract; the
//! pipeline only cares about the shape.

use gv_data::{Dataset, Record};

fn record(
    country: &str,
    continent: &str,
    year: i32,
    population: f64,
    life_exp: f64,
    gdp_percap: f64,
) -> Record {
    Record {
        country: country.to_string(),
        continent: continent.to_string(),
        year,
        population,
        life_exp,
        gdp_percap,
    }
}

/// Three observation years for a handful of countries across four
/// continents.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        record("Russia", "Europe", 1997, 148_000_000.0, 66.0, 7_193.0),
        record("Russia", "Europe", 2002, 145_000_000.0, 65.1, 9_231.0),
        record("Russia", "Europe", 2007, 142_100_000.0, 67.0, 14_869.0),
        record("United Kingdom", "Europe", 1997, 58_300_000.0, 77.2, 26_075.0),
        record("United Kingdom", "Europe", 2002, 59_400_000.0, 78.5, 29_479.0),
        record("United Kingdom", "Europe", 2007, 60_800_000.0, 79.4, 33_203.0),
        record("Canada", "Americas", 1997, 30_300_000.0, 78.6, 28_955.0),
        record("Canada", "Americas", 2002, 31_900_000.0, 79.8, 33_329.0),
        record("Canada", "Americas", 2007, 33_400_000.0, 80.7, 36_319.0),
        record("United States", "Americas", 1997, 272_900_000.0, 76.8, 35_767.0),
        record("United States", "Americas", 2002, 287_700_000.0, 77.3, 39_097.0),
        record("United States", "Americas", 2007, 301_100_000.0, 78.2, 42_952.0),
        record("China", "Asia", 1997, 1_230_075_000.0, 70.4, 2_289.0),
        record("China", "Asia", 2002, 1_280_400_000.0, 72.0, 3_119.0),
        record("China", "Asia", 2007, 1_318_683_000.0, 73.0, 4_959.0),
        record("India", "Asia", 1997, 959_000_000.0, 61.8, 1_459.0),
        record("India", "Asia", 2002, 1_034_173_000.0, 62.9, 1_747.0),
        record("India", "Asia", 2007, 1_110_396_000.0, 64.7, 2_452.0),
        record("Japan", "Asia", 1997, 125_956_000.0, 80.7, 28_817.0),
        record("Japan", "Asia", 2002, 127_065_000.0, 82.0, 28_605.0),
        record("Japan", "Asia", 2007, 127_467_000.0, 82.6, 31_656.0),
        record("Nigeria", "Africa", 1997, 106_207_000.0, 47.5, 1_624.0),
        record("Nigeria", "Africa", 2002, 119_901_000.0, 46.6, 1_615.0),
        record("Nigeria", "Africa", 2007, 135_031_000.0, 46.9, 2_014.0),
        record("Brazil", "Americas", 1997, 168_546_000.0, 69.4, 7_958.0),
        record("Brazil", "Americas", 2002, 179_914_000.0, 71.0, 8_131.0),
        record("Brazil", "Americas", 2007, 190_010_000.0, 72.4, 9_066.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let dataset = sample_dataset();
        assert_eq!(dataset.countries().len(), 9);
        assert_eq!(dataset.year_bounds(), Some((1997, 2007)));
    }
}
