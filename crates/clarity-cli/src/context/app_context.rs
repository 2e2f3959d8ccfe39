use std::sync::Arc;

use anyhow::Context;

use clarity_coach::Coach;
use clarity_config::ClarityConfig;
use clarity_db::service::ClarityService;

/// Resolved configuration plus constructors for the shared resources.
///
/// Resources are opened on demand so `ask` never touches the store and
/// `user create` never needs an API key.
pub struct AppContext {
    pub config: ClarityConfig,
}

impl AppContext {
    pub const fn new(config: ClarityConfig) -> Self {
        Self { config }
    }

    /// Open the configured store, running migrations.
    pub async fn service(&self) -> anyhow::Result<Arc<ClarityService>> {
        let service = ClarityService::from_config(&self.config.database)
            .await
            .context("failed to open the clarity database")?;
        Ok(Arc::new(service))
    }

    /// Build the coach over the configured Gemini client.
    pub fn coach(&self) -> anyhow::Result<Coach> {
        let gemini = self.config.require_gemini()?;
        Coach::from_config(gemini).context("failed to build the Gemini client")
    }
}
