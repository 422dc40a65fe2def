use std::collections::HashMap;

use serde::Serialize;

/// One surveyed country: its name as it appears in the survey document, and
/// the per-question response rates keyed by question label. An empty response
/// in the source maps to `None`.
#[derive(Debug, Clone)]
pub struct EmotionRecord {
    pub name: String,
    pub rates: HashMap<String, Option<f64>>,
}

/// One row of the output report. Field order is the column order of the CSV;
/// absent values serialize as empty fields.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "Region")]
    pub region: String,

    #[serde(rename = "GDP")]
    pub gdp: Option<f64>,

    #[serde(rename = "Population")]
    pub population: Option<i64>,

    #[serde(rename = "Enjoyment")]
    pub enjoyment: Option<f64>,

    #[serde(rename = "Well-Rested")]
    pub well_rested: Option<f64>,

    #[serde(rename = "Learned")]
    pub learned: Option<f64>,

    #[serde(rename = "Smiled")]
    pub smiled: Option<f64>,

    #[serde(rename = "Respect")]
    pub respect: Option<f64>,

    #[serde(rename = "Positive Experience Index")]
    pub positive_experience_index: Option<f64>,
}
