//! Wire DTOs for the experiments API boundary.
//!
//! DESIGN
//! ======
//! Records are given an explicit serde schema here instead of being passed
//! around as loose JSON: nested collections default to empty so a partial
//! record from the server degrades to blank cells rather than a render
//! failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A tracked experiment as returned by the experiments API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Unique experiment identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Experiment version label (e.g. `"0.0.1"`).
    pub version: String,
    /// Display name of the experiment's author.
    pub author: String,
    /// Creation timestamp as an ISO 8601 date string.
    pub created_at: String,
    /// Free-form tag labels; duplicates are allowed and preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Runs recorded against this experiment.
    #[serde(default)]
    pub runs: Vec<Run>,
}

/// One executed instance of an experiment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Unique run identifier (UUID string).
    pub uuid: String,
    /// Recorded metric values.
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// Recorded parameter values.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Raw measurement records; the list view only renders their count.
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

/// A named metric value recorded by a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: serde_json::Value,
}

/// A named parameter value recorded by a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: serde_json::Value,
}

/// A raw measurement record. Opaque to the list view, which only counts
/// them; the payload shape is owned by the run detail screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// One page of experiments as returned by `GET /api/experiments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentPageResponse {
    /// Records on the requested page.
    #[serde(default)]
    pub items: Vec<Experiment>,
    /// Total number of experiments across all pages.
    #[serde(default)]
    pub total: u64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
