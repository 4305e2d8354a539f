//! Content loaders for reading game data from files.
//!
//! Definition tables are RON (one file per table, a list of records indexed
//! by their embedded id); global configuration is TOML.

mod config;
mod definitions;

pub use config::ConfigLoader;
pub use definitions::DefinitionLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
