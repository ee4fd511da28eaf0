// Single source of truth for all default values.

// --- Default matrix ---
pub const DEFAULT_IMPACT_LABELS: [&str; 4] = ["Low", "Medium", "High", "Critical"];
pub const DEFAULT_LIKELIHOOD_LABELS: [&str; 4] = ["Rare", "Unlikely", "Possible", "Likely"];

/// Newest settings schema version this engine understands.
pub const MATRIX_SETTINGS_VERSION: u32 = 1;

// --- GUT ---
pub const GUT_FACTOR_MIN: u8 = 1;
pub const GUT_FACTOR_MAX: u8 = 5;

// --- Resolver ---
pub const DEFAULT_SETTINGS_KEY: &str = "risk_matrix";
pub const DEFAULT_ACCEPT_TOP_LEVEL: bool = true;

// --- Config file ---
pub const PROJECT_CONFIG_FILENAME: &str = "riskmatrix.toml";

// --- Observability ---
pub const LOG_ENV_VAR: &str = "RISKMATRIX_LOG";
pub const DEFAULT_LOG_FILTER: &str = "riskmatrix=info";
pub const DEFAULT_LOG_JSON: bool = false;

// --- Palette (hex) ---
pub const COLOR_BLUE: &str = "#3b82f6";
pub const COLOR_GREEN: &str = "#22c55e";
pub const COLOR_YELLOW: &str = "#eab308";
pub const COLOR_ORANGE: &str = "#f97316";
pub const COLOR_RED: &str = "#ef4444";
