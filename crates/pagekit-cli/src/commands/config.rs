use anyhow::{Context, Result};
use std::path::Path;

pub fn execute(path: Option<&Path>) -> Result<()> {
    let config = super::load_config(path)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}
