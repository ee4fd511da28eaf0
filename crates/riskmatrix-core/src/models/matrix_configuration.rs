use serde::Serialize;
use ts_rs::TS;

use super::MatrixDimension;
use crate::constants::{
    DEFAULT_IMPACT_LABELS, DEFAULT_LIKELIHOOD_LABELS, MATRIX_SETTINGS_VERSION,
};
use crate::errors::MatrixConfigError;

/// A tenant's severity-matrix configuration.
///
/// Validated on construction: both label lists always hold exactly
/// `dimension.size()` entries. The engine only reads these; tenant settings
/// own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MatrixConfiguration {
    version: u32,
    #[ts(type = "4 | 5")]
    dimension: MatrixDimension,
    impact_labels: Vec<String>,
    likelihood_labels: Vec<String>,
}

impl MatrixConfiguration {
    /// Build a configuration, checking label counts against the dimension.
    pub fn new(
        dimension: MatrixDimension,
        impact_labels: Vec<String>,
        likelihood_labels: Vec<String>,
    ) -> Result<Self, MatrixConfigError> {
        let expected = usize::from(dimension.size());
        if impact_labels.len() != expected {
            return Err(MatrixConfigError::LabelCountMismatch {
                axis: "impact",
                expected,
                actual: impact_labels.len(),
            });
        }
        if likelihood_labels.len() != expected {
            return Err(MatrixConfigError::LabelCountMismatch {
                axis: "likelihood",
                expected,
                actual: likelihood_labels.len(),
            });
        }
        Ok(Self {
            version: MATRIX_SETTINGS_VERSION,
            dimension,
            impact_labels,
            likelihood_labels,
        })
    }

    /// Record the settings schema version the configuration was read from.
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// The built-in 4×4 matrix used whenever a tenant has no usable
    /// configuration.
    pub fn builtin_default() -> Self {
        Self {
            version: MATRIX_SETTINGS_VERSION,
            dimension: MatrixDimension::Four,
            impact_labels: DEFAULT_IMPACT_LABELS.iter().map(|s| s.to_string()).collect(),
            likelihood_labels: DEFAULT_LIKELIHOOD_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn dimension(&self) -> MatrixDimension {
        self.dimension
    }

    /// Impact labels, lowest level first.
    pub fn impact_labels(&self) -> &[String] {
        &self.impact_labels
    }

    /// Likelihood labels, lowest level first.
    pub fn likelihood_labels(&self) -> &[String] {
        &self.likelihood_labels
    }
}

impl Default for MatrixConfiguration {
    fn default() -> Self {
        Self::builtin_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("L{i}")).collect()
    }

    #[test]
    fn builtin_default_is_four_by_four() {
        let cfg = MatrixConfiguration::builtin_default();
        assert_eq!(cfg.dimension(), MatrixDimension::Four);
        assert_eq!(cfg.impact_labels(), ["Low", "Medium", "High", "Critical"]);
        assert_eq!(
            cfg.likelihood_labels(),
            ["Rare", "Unlikely", "Possible", "Likely"]
        );
    }

    #[test]
    fn rejects_short_impact_labels() {
        let err = MatrixConfiguration::new(MatrixDimension::Five, labels(4), labels(5))
            .unwrap_err();
        assert_eq!(
            err,
            MatrixConfigError::LabelCountMismatch {
                axis: "impact",
                expected: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn rejects_long_likelihood_labels() {
        assert!(MatrixConfiguration::new(MatrixDimension::Four, labels(4), labels(5)).is_err());
    }
}
