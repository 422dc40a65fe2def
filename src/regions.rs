//! Country-code to continent lookup.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::series::column_index;

/// Reads the country-continent mapping into code -> continent. The source is
/// authoritative, so a code appearing twice keeps the last row's continent.
pub fn load_region_lookup(path: &Path) -> Result<HashMap<String, String>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let code_idx = column_index(&headers, "iso3", path)?;
    let continent_idx = column_index(&headers, "continent", path)?;

    let mut lookup = HashMap::new();
    for result in reader.records() {
        let record = result?;
        if let (Some(code), Some(continent)) = (record.get(code_idx), record.get(continent_idx)) {
            lookup.insert(code.to_string(), continent.to_string());
        }
    }

    Ok(lookup)
}
