//! Resolution outcome: the configuration plus where it came from.

use std::fmt;

use riskmatrix_core::models::MatrixConfiguration;

/// Why the built-in default matrix was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultReason {
    /// No tenant id was supplied (or it was blank).
    NoTenant,
    /// The tenant has no matrix in its settings.
    NotConfigured,
    /// The provider failed.
    LookupFailed,
    /// The tenant's matrix settings did not validate.
    Malformed,
}

impl DefaultReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoTenant => "no_tenant",
            Self::NotConfigured => "not_configured",
            Self::LookupFailed => "lookup_failed",
            Self::Malformed => "malformed",
        }
    }
}

/// Where a resolved configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    Tenant,
    Default(DefaultReason),
}

impl ResolutionSource {
    /// `tenant` or `default:<reason>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Default(DefaultReason::NoTenant) => "default:no_tenant",
            Self::Default(DefaultReason::NotConfigured) => "default:not_configured",
            Self::Default(DefaultReason::LookupFailed) => "default:lookup_failed",
            Self::Default(DefaultReason::Malformed) => "default:malformed",
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, Self::Default(_))
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved matrix configuration and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub configuration: MatrixConfiguration,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn tenant(configuration: MatrixConfiguration) -> Self {
        Self {
            configuration,
            source: ResolutionSource::Tenant,
        }
    }

    /// The built-in 4×4 matrix, attributed to `reason`.
    pub fn fallback(reason: DefaultReason) -> Self {
        Self {
            configuration: MatrixConfiguration::builtin_default(),
            source: ResolutionSource::Default(reason),
        }
    }

    pub fn is_default(&self) -> bool {
        self.source.is_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskmatrix_core::models::MatrixDimension;

    #[test]
    fn source_strings_are_stable() {
        assert_eq!(ResolutionSource::Tenant.to_string(), "tenant");
        assert_eq!(
            ResolutionSource::Default(DefaultReason::LookupFailed).to_string(),
            "default:lookup_failed"
        );
        assert_eq!(DefaultReason::Malformed.as_str(), "malformed");
    }

    #[test]
    fn fallback_is_builtin_four_by_four() {
        let r = Resolution::fallback(DefaultReason::NoTenant);
        assert!(r.is_default());
        assert_eq!(r.configuration.dimension(), MatrixDimension::Four);
    }
}
