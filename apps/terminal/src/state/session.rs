//! # Session State
//!
//! One ordering session: the configuration, the catalog source and the
//! configurator that owns the order in progress.
//!
//! The session is owned by the input loop and mutated through `&mut self`;
//! there is a single caller, so no locking is involved.

use pizza_core::OrderConfigurator;
use tracing::info;

use crate::catalog::CatalogSource;
use crate::error::ApiResult;
use crate::state::ConfigState;

#[derive(Debug)]
pub struct Session {
    config: ConfigState,
    source: CatalogSource,
    configurator: OrderConfigurator,
}

impl Session {
    /// Loads the catalog from the configured directory and starts a session.
    ///
    /// A missing or broken catalog does not stop the session; the affected
    /// lists simply show as failed.
    pub fn start(config: ConfigState) -> Self {
        let source = CatalogSource::new(config.catalog_dir.clone());
        let configurator = OrderConfigurator::new(source.load());
        info!(catalog_dir = %source.dir().display(), "Session started");

        Session {
            config,
            source,
            configurator,
        }
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn configurator(&self) -> &OrderConfigurator {
        &self.configurator
    }

    pub fn configurator_mut(&mut self) -> &mut OrderConfigurator {
        &mut self.configurator
    }

    /// Re-reads the catalog files and hands them to the configurator.
    ///
    /// Choices already made are kept (see `refresh_catalog`).
    pub fn reload_catalog(&mut self) -> ApiResult<()> {
        self.source.ensure_dir()?;
        self.configurator.refresh_catalog(self.source.load());
        info!("Catalog reloaded");
        Ok(())
    }
}
