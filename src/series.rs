//! Loaders for the World Bank style time-series exports (GDP per capita and
//! total population). The files carry four metadata records before the real
//! header row; data rows may end with a trailing empty field, so the reader
//! runs in flexible mode.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{ReportError, Result};

/// Year column preferred when populated.
pub const LATEST_YEAR: &str = "2023";
/// Single fallback year when the latest column is empty.
pub const PRIOR_YEAR: &str = "2022";

const METADATA_ROWS: usize = 4;

/// Position of a named column in a header record.
pub(crate) fn column_index(header: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    header
        .iter()
        .position(|field| field == column)
        .ok_or_else(|| ReportError::MissingColumn {
            column: column.to_string(),
            file: path.display().to_string(),
        })
}

fn parse_value(raw: &str, path: &Path) -> Result<f64> {
    raw.parse::<f64>().map_err(|_| ReportError::InvalidNumber {
        value: raw.to_string(),
        file: path.display().to_string(),
    })
}

/// Reads one time-series file into code -> value-or-absent, taking the latest
/// year's value when non-empty and falling back to the prior year. Countries
/// with neither year populated stay in the map with an absent value.
fn load_year_series(path: &Path) -> Result<HashMap<String, Option<f64>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = reader.records();
    for _ in 0..METADATA_ROWS {
        records.next().transpose()?;
    }
    let header = records
        .next()
        .transpose()?
        .ok_or_else(|| ReportError::MissingHeader {
            file: path.display().to_string(),
        })?;

    let code_idx = column_index(&header, "Country Code", path)?;
    let latest_idx = column_index(&header, LATEST_YEAR, path)?;
    let prior_idx = column_index(&header, PRIOR_YEAR, path)?;

    let mut series = HashMap::new();
    for result in records {
        let record = result?;
        let code = match record.get(code_idx) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => continue,
        };
        let raw = record
            .get(latest_idx)
            .filter(|value| !value.is_empty())
            .or_else(|| record.get(prior_idx).filter(|value| !value.is_empty()));
        let value = match raw {
            Some(raw) => Some(parse_value(raw, path)?),
            None => None,
        };
        series.insert(code, value);
    }

    Ok(series)
}

/// GDP per capita (PPP) by country code for the most recent year with data.
pub fn load_gdp_lookup(path: &Path) -> Result<HashMap<String, Option<f64>>> {
    load_year_series(path)
}

/// Total population by country code, truncated to whole persons. Some source
/// rows carry fractional values, so the parse goes through f64 first.
pub fn load_population_lookup(path: &Path) -> Result<HashMap<String, Option<i64>>> {
    let series = load_year_series(path)?;
    Ok(series
        .into_iter()
        .map(|(code, value)| (code, value.map(|v| v as i64)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const GDP_FIXTURE: &str = "\
\"Data Source\",\"World Development Indicators\"
\"Last Updated Date\",\"2024-05-30\"
\"Indicator\",\"GDP per capita, PPP\"
\"Unit\",\"current international $\"
\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"2022\",\"2023\",
\"Norway\",\"NOR\",\"GDP pc\",\"NY.GDP.PCAP.PP.CD\",\"114000.25\",\"121000.5\",
\"Sweden\",\"SWE\",\"GDP pc\",\"NY.GDP.PCAP.PP.CD\",\"64000.75\",\"\",
\"Eritrea\",\"ERI\",\"GDP pc\",\"NY.GDP.PCAP.PP.CD\",\"\",\"\",
";

    fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    #[test]
    fn gdp_prefers_latest_year() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = write_fixture(&tmp, "gdp.csv", GDP_FIXTURE);
        let lookup = load_gdp_lookup(&path).expect("load failed");
        assert_eq!(lookup["NOR"], Some(121000.5));
    }

    #[test]
    fn gdp_falls_back_to_prior_year() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = write_fixture(&tmp, "gdp.csv", GDP_FIXTURE);
        let lookup = load_gdp_lookup(&path).expect("load failed");
        assert_eq!(lookup["SWE"], Some(64000.75));
    }

    #[test]
    fn gdp_absent_when_both_years_empty() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = write_fixture(&tmp, "gdp.csv", GDP_FIXTURE);
        let lookup = load_gdp_lookup(&path).expect("load failed");
        // The country is still keyed, with an explicitly absent value.
        assert_eq!(lookup["ERI"], None);
        assert_eq!(lookup.len(), 3);
    }

    #[test]
    fn missing_code_column_is_fatal() {
        let fixture = "\
\"Data Source\",\"World Development Indicators\"
\"Last Updated Date\",\"2024-05-30\"
\"Indicator\",\"GDP per capita, PPP\"
\"Unit\",\"current international $\"
\"Country Name\",\"Indicator Name\",\"2022\",\"2023\"
\"Norway\",\"GDP pc\",\"114000.25\",\"121000.5\"
";
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = write_fixture(&tmp, "gdp.csv", fixture);
        let err = load_gdp_lookup(&path).unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingColumn { ref column, .. } if column == "Country Code"
        ));
    }

    #[test]
    fn population_truncates_fractional_values() {
        let fixture = "\
\"Data Source\",\"World Development Indicators\"
\"Last Updated Date\",\"2024-05-30\"
\"Indicator\",\"Population, total\"
\"Unit\",\"persons\"
\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"2022\",\"2023\",
\"Norway\",\"NOR\",\"Population\",\"SP.POP.TOTL\",\"5425270\",\"5474360.9\",
";
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = write_fixture(&tmp, "pop.csv", fixture);
        let lookup = load_population_lookup(&path).expect("load failed");
        assert_eq!(lookup["NOR"], Some(5474360));
    }

    #[test]
    fn invalid_number_is_fatal() {
        let fixture = "\
\"Data Source\",\"World Development Indicators\"
\"Last Updated Date\",\"2024-05-30\"
\"Indicator\",\"GDP per capita, PPP\"
\"Unit\",\"current international $\"
\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"2022\",\"2023\"
\"Norway\",\"NOR\",\"GDP pc\",\"NY.GDP.PCAP.PP.CD\",\"114000.25\",\"not-a-number\"
";
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = write_fixture(&tmp, "gdp.csv", fixture);
        let err = load_gdp_lookup(&path).unwrap_err();
        assert!(matches!(err, ReportError::InvalidNumber { .. }));
    }
}
