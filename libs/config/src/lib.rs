//! # Bancor Engine Configuration
//!
//! Configuration loading and logging bootstrap for processes that embed the formula
//! engine. The engine itself is pure and holds no configuration; hosts read protection
//! settings and logging preferences here and pass them in.
//!
//! ## Features
//!
//! - **Layered Loading**: TOML base file, per-environment overlay, `BANCOR_` variables
//! - **Protection Settings**: Delays and rate deviation, validated before use
//! - **Logging**: `tracing-subscriber` with `RUST_LOG` override and optional JSON output
//! - **Constants**: Formula and protection limits under one namespace
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bancor_config::{init_logging, EngineConfig};
//! use std::path::Path;
//!
//! let config = EngineConfig::load(Some(Path::new("config/engine.toml")), Some("staging"))?;
//! init_logging(&config.logging)?;
//!
//! let max_delay = config.protection.max_protection_delay;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod constants;
pub mod engine_config;
pub mod logging;

// Re-export commonly used types
pub use constants::{formula, loading, protection};
pub use engine_config::{load_config, EngineConfig};
pub use logging::{init_logging, LoggingConfig};
