use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{error, info};

use crate::models::Lead;

static LEADS_JSON: &str = include_str!("../assets/leads.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid leads dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("leads dataset is empty")]
    Empty,
}

/// The dataset's entire lifetime: parsed once, never mutated. A broken
/// bundle degrades to the fixture sample instead of a blank board.
static LEADS: Lazy<Vec<Lead>> = Lazy::new(|| match parse_dataset(LEADS_JSON) {
    Ok(leads) => {
        info!(count = leads.len(), "leads dataset loaded");
        leads
    }
    Err(err) => {
        error!("falling back to fixture leads: {err}");
        crate::fixtures::leads::sample_leads()
    }
});

pub fn leads() -> &'static [Lead] {
    &LEADS
}

pub fn parse_dataset(raw: &str) -> Result<Vec<Lead>, DatasetError> {
    let leads: Vec<Lead> = serde_json::from_str(raw)?;
    if leads.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(leads)
}
