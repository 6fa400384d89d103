//! Engine limits and configuration defaults
//!
//! Compile-time values shared by hosts that size inputs or validate settings before
//! calling into the engine.

/// Bonding curve limits
pub mod formula {
    pub use bancor_amm::tables::{MAX_PRECISION, MAX_WEIGHT, MIN_PRECISION};

    /// Upper bound of the multi-reserve ratio accepted by fund and liquidate
    pub const MAX_RESERVE_RATIO: u32 = 2 * MAX_WEIGHT;

    /// Largest integer exponent evaluated by exact repeated multiplication
    pub use bancor_amm::integer_math::MAX_EXP as MAX_INTEGER_EXPONENT;
}

/// Liquidity protection defaults
pub mod protection {
    pub use bancor_amm::protection::defaults::{
        AVERAGE_RATE_MAX_DEVIATION_PPM, MAX_PROTECTION_DELAY, MIN_PROTECTION_DELAY,
        PPM_RESOLUTION, SECONDS_PER_DAY,
    };
}

/// Configuration file layout
pub mod loading {
    /// Base file read when no path is given
    pub const DEFAULT_CONFIG_PATH: &str = "config/engine.toml";

    /// Overlay directory, relative to the base file
    pub const ENVIRONMENTS_DIR: &str = "environments";

    /// Prefix of overriding environment variables (`BANCOR_PROTECTION__MAX_PROTECTION_DELAY`)
    pub const ENV_PREFIX: &str = "BANCOR";

    /// Separator between nested keys in environment variable names
    pub const ENV_SEPARATOR: &str = "__";
}

/// Logging defaults
pub mod logging {
    pub const DEFAULT_LEVEL: &str = "info";
}
