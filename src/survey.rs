//! Loaders for the two JSON inputs: the global emotions survey document and
//! the survey-name to ISO3 code map.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, Result};
use crate::models::EmotionRecord;

#[derive(Debug, Deserialize)]
struct SurveyDocument {
    #[serde(rename = "qInfo")]
    questions: HashMap<String, QuestionInfo>,
    data: Vec<SurveyEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionInfo {
    label: String,
}

#[derive(Debug, Deserialize)]
struct SurveyEntry {
    name: String,
    // Everything besides the name is a question object keyed q1..q10.
    #[serde(flatten)]
    answers: HashMap<String, Answer>,
}

#[derive(Debug, Deserialize)]
struct Answer {
    yes: String,
}

/// Reads the survey document into one record per country, in document order.
/// Question keys are translated to their labels from the `qInfo` section; an
/// empty response string becomes an absent rate.
pub fn load_survey(path: &Path) -> Result<Vec<EmotionRecord>> {
    let file = File::open(path)?;
    let document: SurveyDocument = serde_json::from_reader(BufReader::new(file))?;

    let mut records = Vec::with_capacity(document.data.len());
    for entry in document.data {
        let mut rates = HashMap::new();
        for (key, question) in &document.questions {
            let raw = entry.answers.get(key).map(|a| a.yes.as_str()).unwrap_or("");
            let rate = if raw.is_empty() {
                None
            } else {
                Some(raw.parse::<f64>().map_err(|_| ReportError::InvalidNumber {
                    value: raw.to_string(),
                    file: path.display().to_string(),
                })?)
            };
            rates.insert(question.label.clone(), rate);
        }
        records.push(EmotionRecord {
            name: entry.name,
            rates,
        });
    }

    Ok(records)
}

/// Reads the flat survey-name -> ISO3 code map.
pub fn load_country_codes(path: &Path) -> Result<HashMap<String, String>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
