use anyhow::{Context, Result};
use recurrence_engine::ExpansionConfig;

use crate::ExpansionArgs;

/// Resolve expansion limits: defaults, then the TOML file, then CLI flags.
pub fn resolve(args: &ExpansionArgs) -> Result<ExpansionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            toml::from_str(&toml_str).context("Failed to parse TOML config")?
        }
        None => ExpansionConfig::default(),
    };

    if let Some(max) = args.max_occurrences {
        config.max_occurrences = max;
    }
    if let Some(ceiling) = args.ceiling {
        config.end_date_ceiling = ceiling;
    }

    config.validate().context("Invalid expansion limits")?;
    Ok(config)
}
