//! Continent composition projection

use gv_data::LatestSnapshot;
use indexmap::IndexMap;
use serde::Serialize;

/// One slice of the continent population pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentSlice {
    pub continent: String,
    pub population: f64,
}

/// Sum population per continent across the snapshot.
///
/// One entry per continent present; continents with no surviving record
/// are omitted, not zero-filled. Proportions and angles are computed by
/// the presentation layer.
pub fn project_composition(snapshot: &LatestSnapshot) -> Vec<ContinentSlice> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for record in snapshot.records() {
        *totals.entry(record.continent.as_str()).or_insert(0.0) += record.population;
    }
    totals
        .into_iter()
        .map(|(continent, population)| ContinentSlice {
            continent: continent.to_string(),
            population,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gv_data::{latest_per_country, Dataset, Record};

    fn record(country: &str, continent: &str, population: f64) -> Record {
        Record {
            country: country.to_string(),
            continent: continent.to_string(),
            year: 2007,
            population,
            life_exp: 50.0,
            gdp_percap: 1000.0,
        }
    }

    #[test]
    fn test_sums_population_per_continent() {
        let snapshot = latest_per_country(
            &Dataset::new(vec![
                record("A", "X", 20.0),
                record("B", "Y", 5.0),
                record("C", "X", 7.0),
            ]),
            None,
        );
        let slices = project_composition(&snapshot);
        assert_eq!(
            slices,
            vec![
                ContinentSlice { continent: "X".to_string(), population: 27.0 },
                ContinentSlice { continent: "Y".to_string(), population: 5.0 },
            ]
        );
    }

    #[test]
    fn test_total_population_is_conserved() {
        let snapshot = latest_per_country(
            &Dataset::new(vec![
                record("A", "X", 20.0),
                record("B", "Y", 5.0),
                record("C", "Z", 7.0),
                record("D", "Y", 3.0),
            ]),
            None,
        );
        let slices = project_composition(&snapshot);
        let sliced: f64 = slices.iter().map(|s| s.population).sum();
        let total: f64 = snapshot.records().iter().map(|r| r.population).sum();
        assert_eq!(sliced, total);
    }

    #[test]
    fn test_empty_snapshot_is_empty_output() {
        let snapshot = latest_per_country(&Dataset::new(Vec::new()), None);
        assert!(project_composition(&snapshot).is_empty());
    }
}
