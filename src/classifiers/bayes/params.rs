use crate::classifiers::error::{ConfigurationError, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

fn default_var_smoothing() -> f64 {
    0.0
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NaiveBayesParams {
    #[serde(default)]
    #[schemars(
        title = "Parallel fit",
        description = "Fit (class, attribute) cells on the rayon thread pool."
    )]
    pub parallel: bool,

    #[serde(default)]
    #[schemars(
        title = "Validate",
        description = "Check partition uniqueness and fitted priors/masses after each fit."
    )]
    pub validate: bool,

    #[serde(default = "default_var_smoothing")]
    #[schemars(
        title = "Variance smoothing",
        description = "Added to every fitted Gaussian variance.",
        default = "default_var_smoothing"
    )]
    pub var_smoothing: f64,
}

impl Default for NaiveBayesParams {
    fn default() -> Self {
        Self {
            parallel: false,
            validate: false,
            var_smoothing: default_var_smoothing(),
        }
    }
}

impl NaiveBayesParams {
    pub fn schema() -> Schema {
        schema_for!(NaiveBayesParams)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let params: NaiveBayesParams =
            serde_json::from_str(text).map_err(|e| ConfigurationError::InvalidParameter {
                name: "params",
                reason: e.to_string(),
            })?;
        params.check()?;
        Ok(params)
    }

    pub fn check(&self) -> Result<()> {
        if !self.var_smoothing.is_finite() || self.var_smoothing < 0.0 {
            return Err(ConfigurationError::InvalidParameter {
                name: "var_smoothing",
                reason: format!("must be finite and >= 0, got {}", self.var_smoothing),
            }
            .into());
        }
        Ok(())
    }
}
