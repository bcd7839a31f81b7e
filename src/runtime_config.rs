//! Environment variable configuration.
//!
//! Directory locations are always explicit values — there is no process-wide
//! application root discovery. The environment variables exist so deployments
//! can relocate the conventional directories without code changes:
//!
//! - `PLUMBER_ROUTES_DIR` — route definition directory (default: `routes`)
//! - `PLUMBER_MIDDLEWARES_DIR` — middleware directory (default: `middlewares`)

use std::env;
use std::path::PathBuf;

/// Directory configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`].
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Directory containing route definition files (default: `routes`)
    pub routes_dir: PathBuf,
    /// Directory containing middleware marker files (default: `middlewares`)
    pub middlewares_dir: PathBuf,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let routes_dir = env::var("PLUMBER_ROUTES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("routes"));
        let middlewares_dir = env::var("PLUMBER_MIDDLEWARES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("middlewares"));
        RuntimeConfig {
            routes_dir,
            middlewares_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // defaults and overrides in one test; no other test touches these vars
    #[test]
    fn test_defaults_and_env_overrides() {
        env::remove_var("PLUMBER_ROUTES_DIR");
        env::remove_var("PLUMBER_MIDDLEWARES_DIR");
        let config = RuntimeConfig::from_env();
        assert_eq!(config.routes_dir, PathBuf::from("routes"));
        assert_eq!(config.middlewares_dir, PathBuf::from("middlewares"));

        env::set_var("PLUMBER_ROUTES_DIR", "app/routes");
        env::set_var("PLUMBER_MIDDLEWARES_DIR", "app/middlewares");
        let config = RuntimeConfig::from_env();
        assert_eq!(config.routes_dir, PathBuf::from("app/routes"));
        assert_eq!(config.middlewares_dir, PathBuf::from("app/middlewares"));

        env::remove_var("PLUMBER_ROUTES_DIR");
        env::remove_var("PLUMBER_MIDDLEWARES_DIR");
    }
}
