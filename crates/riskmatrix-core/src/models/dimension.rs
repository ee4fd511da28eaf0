use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MatrixConfigError;

/// Size of the square severity matrix.
///
/// Serialized as the integer `4` or `5`. Tenant settings spell it as the tag
/// `"4x4"` / `"5x5"`; see [`MatrixDimension::from_tag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MatrixDimension {
    #[default]
    Four,
    Five,
}

impl MatrixDimension {
    /// Number of levels on each axis.
    pub fn size(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Largest possible probability × impact product.
    pub fn max_product(self) -> u32 {
        let n = u32::from(self.size());
        n * n
    }

    /// Settings tag for this dimension.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Four => "4x4",
            Self::Five => "5x5",
        }
    }

    /// Parse the settings tag (`"4x4"` or `"5x5"`).
    pub fn from_tag(tag: &str) -> Result<Self, MatrixConfigError> {
        match tag.trim() {
            "4x4" => Ok(Self::Four),
            "5x5" => Ok(Self::Five),
            other => Err(MatrixConfigError::UnsupportedDimension {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for MatrixDimension {
    type Error = MatrixConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => Err(MatrixConfigError::UnsupportedDimension {
                value: other.to_string(),
            }),
        }
    }
}

impl From<MatrixDimension> for u8 {
    fn from(d: MatrixDimension) -> Self {
        d.size()
    }
}

impl fmt::Display for MatrixDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for d in [MatrixDimension::Four, MatrixDimension::Five] {
            assert_eq!(MatrixDimension::from_tag(d.tag()).unwrap(), d);
        }
    }

    #[test]
    fn rejects_other_sizes() {
        assert!(MatrixDimension::try_from(3).is_err());
        assert!(MatrixDimension::try_from(6).is_err());
        assert!(MatrixDimension::from_tag("3x3").is_err());
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&MatrixDimension::Five).unwrap(), "5");
        let d: MatrixDimension = serde_json::from_str("4").unwrap();
        assert_eq!(d, MatrixDimension::Four);
        assert!(serde_json::from_str::<MatrixDimension>("7").is_err());
    }
}
