//! Configuration oracle exposing global balance values.

use crate::config::GameConfig;

/// Provides access to the loaded global configuration.
pub trait ConfigOracle: Send + Sync {
    /// The sanitized global configuration for this session.
    fn config(&self) -> &GameConfig;
}
