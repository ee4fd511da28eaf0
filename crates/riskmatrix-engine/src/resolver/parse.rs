//! Settings ingress: find and validate the matrix inside a settings document.
//!
//! Everything a tenant can get wrong is turned into either `Ok(None)` (no
//! matrix configured) or a [`MatrixConfigError`] here, so callers never
//! null-check raw JSON.

use serde::Deserialize;
use serde_json::Value;

use riskmatrix_core::constants::MATRIX_SETTINGS_VERSION;
use riskmatrix_core::errors::MatrixConfigError;
use riskmatrix_core::models::{MatrixConfiguration, MatrixDimension};

/// Wire shape of the matrix sub-object. Unknown sibling fields are ignored.
#[derive(Debug, Deserialize)]
struct MatrixSettingsRecord {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default = "default_version")]
    version: u64,
    impact_labels: Vec<String>,
    likelihood_labels: Vec<String>,
}

fn default_version() -> u64 {
    u64::from(MATRIX_SETTINGS_VERSION)
}

/// Locate the matrix sub-object in a settings document.
///
/// `settings_key` may be a dotted path (`"grc.risk_matrix"`). When the key
/// is absent and `accept_top_level` is set, a document that itself carries a
/// `type` field plus at least one label list is taken as the matrix.
pub fn locate_matrix<'a>(
    document: &'a Value,
    settings_key: &str,
    accept_top_level: bool,
) -> Result<Option<&'a Value>, MatrixConfigError> {
    let root = match document {
        Value::Null => return Ok(None),
        Value::Object(map) => map,
        _ => return Err(MatrixConfigError::InvalidField { field: "settings" }),
    };

    let mut current = Some(document);
    for segment in settings_key.split('.') {
        current = current.and_then(|v| v.get(segment));
    }

    match current {
        Some(Value::Null) => Ok(None),
        Some(found) => Ok(Some(found)),
        None if accept_top_level && looks_like_matrix(root) => Ok(Some(document)),
        None => Ok(None),
    }
}

/// A bare `type` is common in unrelated settings; require a label list too.
fn looks_like_matrix(root: &serde_json::Map<String, Value>) -> bool {
    root.contains_key("type")
        && (root.contains_key("impact_labels") || root.contains_key("likelihood_labels"))
}

/// Validate a matrix sub-object into a configuration.
pub fn parse_matrix_object(value: &Value) -> Result<MatrixConfiguration, MatrixConfigError> {
    let record = MatrixSettingsRecord::deserialize(value).map_err(|e| {
        MatrixConfigError::InvalidShape {
            message: e.to_string(),
        }
    })?;

    if record.version == 0 {
        return Err(MatrixConfigError::InvalidField { field: "version" });
    }
    if record.version > u64::from(MATRIX_SETTINGS_VERSION) {
        return Err(MatrixConfigError::UnsupportedVersion {
            found: record.version,
            supported: MATRIX_SETTINGS_VERSION,
        });
    }

    let dimension = MatrixDimension::from_tag(&record.kind)?;
    let config =
        MatrixConfiguration::new(dimension, record.impact_labels, record.likelihood_labels)?;
    // Bounded by MATRIX_SETTINGS_VERSION above.
    Ok(config.with_version(record.version as u32))
}

/// Locate and validate the matrix in a settings document.
///
/// `Ok(None)` means the tenant has not configured a matrix.
pub fn parse_matrix_settings(
    document: &Value,
    settings_key: &str,
    accept_top_level: bool,
) -> Result<Option<MatrixConfiguration>, MatrixConfigError> {
    locate_matrix(document, settings_key, accept_top_level)?
        .map(parse_matrix_object)
        .transpose()
}
