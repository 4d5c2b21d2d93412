use std::sync::Arc;

use crate::app::error::Result;
use crate::client::{HttpSummaryClient, SummaryClient};
use crate::config::Config;
use crate::theme::ThemeStore;

/// Wires together the components every entry point needs: configuration,
/// the API client, and the theme store.
pub struct AppContext {
    pub config: Config,
    pub client: Arc<dyn SummaryClient + Send + Sync>,
    pub theme: ThemeStore,
}

impl AppContext {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let client: Arc<dyn SummaryClient + Send + Sync> =
            Arc::new(HttpSummaryClient::new(config.api.base_url.clone()));
        let theme = ThemeStore::load()?;

        Ok(Self {
            config,
            client,
            theme,
        })
    }

    /// Context with an explicit client and theme store, for tests.
    #[cfg(test)]
    pub fn with_parts(
        config: Config,
        client: Arc<dyn SummaryClient + Send + Sync>,
        theme: ThemeStore,
    ) -> Self {
        Self {
            config,
            client,
            theme,
        }
    }
}
