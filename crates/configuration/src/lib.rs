use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod overrides;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use overrides::PolicyOverrides;
pub use settings::{
    Adjustment, AdjustmentRule, Config, LoggingConfig, MarketPolicy, MedianPolicy,
    MortgagePolicy, NegotiationPolicy, ValuationPolicy,
};

/// Prefix for environment variable overrides, e.g. `KEYSTONE__MARKET__TREND_BAND`.
pub const ENV_PREFIX: &str = "KEYSTONE";

/// Loads the engine configuration.
///
/// Sources are layered: built-in defaults, then the TOML file at `path` (if it
/// exists), then `KEYSTONE__*` environment variables. The merged result is
/// validated before it is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(builder)
}

/// Parses a configuration from an in-memory TOML document.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(builder)
}

fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
