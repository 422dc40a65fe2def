//! Joins the loaded datasets into the denormalized report and computes the
//! Positive Experience Index.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::config::Paths;
use crate::error::Result;
use crate::models::{EmotionRecord, ReportRow};
use crate::regions::load_region_lookup;
use crate::series::{load_gdp_lookup, load_population_lookup};
use crate::survey::{load_country_codes, load_survey};

/// The five survey indicators averaged into the index, in output column order.
pub const POSITIVE_INDICATORS: [&str; 5] =
    ["Enjoyment", "Well-Rested", "Learned", "Smiled", "Respect"];

/// Immutable snapshot of all five lookups, built once per run and shared by
/// the report builder and the diagnostics.
#[derive(Debug)]
pub struct Datasets {
    pub gdp: HashMap<String, Option<f64>>,
    pub population: HashMap<String, Option<i64>>,
    pub emotions: Vec<EmotionRecord>,
    pub regions: HashMap<String, String>,
    pub country_codes: HashMap<String, String>,
}

impl Datasets {
    pub fn load(paths: &Paths) -> Result<Self> {
        let gdp = load_gdp_lookup(&paths.gdp)?;
        info!("loaded GDP values for {} country codes", gdp.len());
        let population = load_population_lookup(&paths.population)?;
        info!("loaded population values for {} country codes", population.len());
        let emotions = load_survey(&paths.survey)?;
        info!("loaded survey responses for {} countries", emotions.len());
        let regions = load_region_lookup(&paths.regions)?;
        info!("loaded {} region mappings", regions.len());
        let country_codes = load_country_codes(&paths.country_codes)?;
        info!("loaded {} country code entries", country_codes.len());

        Ok(Self {
            gdp,
            population,
            emotions,
            regions,
            country_codes,
        })
    }
}

/// Mean of the indicator rates that are present. Absent when all five are
/// absent, so the report never divides by zero or emits a NaN.
pub fn positive_experience_index(rates: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = rates.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Writes one report row per surveyed country, in survey order, and returns
/// the countries whose code was unresolved or whose GDP or population came up
/// absent. Those countries still get a row; only the affected fields stay
/// empty.
pub fn write_report(data: &Datasets, out: &Path) -> Result<Vec<String>> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = WriterBuilder::new().has_headers(true).from_path(out)?;
    let mut missing = Vec::new();

    for record in &data.emotions {
        let code = data.country_codes.get(&record.name);
        let gdp = code.and_then(|c| data.gdp.get(c)).copied().flatten();
        let population = code.and_then(|c| data.population.get(c)).copied().flatten();
        let region = code
            .and_then(|c| data.regions.get(c))
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        if code.is_none() || gdp.is_none() || population.is_none() {
            missing.push(record.name.clone());
        }

        let rate = |label: &str| record.rates.get(label).copied().flatten();
        let indicators: Vec<Option<f64>> = POSITIVE_INDICATORS.iter().map(|&label| rate(label)).collect();

        writer.serialize(ReportRow {
            country: record.name.clone(),
            region,
            gdp,
            population,
            enjoyment: indicators[0],
            well_rested: indicators[1],
            learned: indicators[2],
            smiled: indicators[3],
            respect: indicators[4],
            positive_experience_index: positive_experience_index(&indicators),
        })?;
    }

    writer.flush()?;
    info!("wrote {} report rows to {}", data.emotions.len(), out.display());

    Ok(missing)
}

/// Cross-check of survey coverage against the GDP lookup: every surveyed
/// country that fails code resolution or has no GDP value, in survey order.
/// Independent of the report itself.
pub fn missing_gdp_entries(data: &Datasets) -> Vec<String> {
    let mut missing = Vec::new();
    for record in &data.emotions {
        match data.country_codes.get(&record.name) {
            Some(code) => {
                if data.gdp.get(code).copied().flatten().is_none() {
                    missing.push(record.name.clone());
                }
            }
            None => missing.push(format!("{} (No country code found)", record.name)),
        }
    }
    missing
}
