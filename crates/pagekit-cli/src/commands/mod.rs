pub mod config;
pub mod replay;
pub mod validate;

use anyhow::Result;
use pagekit_page::PageConfig;
use std::path::Path;

/// Load the config at `path`, or `pagekit.toml` when none is given
pub(crate) fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    match path {
        Some(path) => PageConfig::load(path),
        None => PageConfig::load_default(),
    }
}
