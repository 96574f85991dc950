use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 10_000;

/// Defaults overlaid with `MAGAZINE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub limit: i64,
    pub progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            progress: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_source(Environment::with_prefix("MAGAZINE"))
    }

    fn from_source(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("limit", DEFAULT_LIMIT)?
            .set_default("progress", false)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

/// Any requested limit becomes at least 1.
pub fn effective_limit(requested: i64) -> usize {
    usize::try_from(requested.max(1)).unwrap_or(usize::MAX)
}
