use anyhow::Context;

use clarity_config::ClarityConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<ClarityConfig> {
    let config = ClarityConfig::load_with_dotenv().context("failed to load clarity configuration")?;
    tracing::debug!(
        database = %config.database.path,
        remote = config.database.is_remote(),
        gemini = config.gemini.is_configured(),
        "configuration loaded"
    );
    Ok(config)
}
