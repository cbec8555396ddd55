//! Configuration loading and management for the Benefits Engine.
//!
//! This module loads the employee roster from YAML and reads server
//! settings from the environment. The benefits cost model is not
//! configured here; it is fixed in [`crate::calculation::CostModel`].
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::{RosterLoader, ServerConfig};
//!
//! let settings = ServerConfig::from_env().unwrap();
//! let roster = RosterLoader::load(&settings.roster_path).unwrap();
//! println!("Loaded {} employees", roster.len());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{
    ENV_LISTEN_ADDR, ENV_LOG_FORMAT, ENV_ROSTER_PATH, ENV_TODAY, LogFormat, RosterConfig,
    ServerConfig,
};
