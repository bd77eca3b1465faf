use crate::classifiers::bayes::NaiveBayesParams;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
}

/// Reads and checks Naive Bayes parameters from a JSON file.
pub fn load_params(path: impl AsRef<Path>) -> Result<NaiveBayesParams> {
    let path = path.as_ref();
    let params: NaiveBayesParams = load_json(path)?;
    params
        .check()
        .with_context(|| format!("invalid parameters in {}", path.display()))?;
    Ok(params)
}
