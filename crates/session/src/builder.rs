//! Assembles the catalog and calculator configuration for a session.
use metanin_content::{ContentFactory, StaticCatalog};
use metanin_core::{CalcConfig, TechniqueOracle};
use tracing::info;

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::session::BuildSession;

/// Builder that picks the catalog source and resolves configuration.
///
/// Source order:
/// 1. A catalog passed to [`SessionBuilder::catalog`]
/// 2. `catalog.ron` in the configured data directory
/// 3. The compiled-in [`StaticCatalog`]
///
/// `config.toml` in the data directory is read when present; environment
/// overrides from [`SessionConfig`] are applied last.
pub struct SessionBuilder {
    config: SessionConfig,
    catalog: Option<Box<dyn TechniqueOracle>>,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            catalog: None,
        }
    }

    /// Provide a custom catalog (e.g., a test fixture).
    pub fn catalog(mut self, catalog: impl TechniqueOracle + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn build(self) -> Result<BuildSession> {
        let factory = self.config.data_dir.as_ref().map(ContentFactory::new);

        let file_config = match &factory {
            Some(factory) if factory.has_config() => {
                let path = factory.config_path();
                let config = factory
                    .load_config()
                    .map_err(|e| SessionError::content(&path, &e))?;
                info!("Loaded calculator config from {}", path.display());
                config
            }
            _ => CalcConfig::default(),
        };
        let config = self.config.apply(file_config);

        let catalog: Box<dyn TechniqueOracle> = match (self.catalog, &factory) {
            (Some(catalog), _) => {
                info!("Using provided technique catalog");
                catalog
            }
            (None, Some(factory)) if factory.has_catalog() => {
                let path = factory.catalog_path();
                let catalog = factory
                    .load_catalog()
                    .map_err(|e| SessionError::content(&path, &e))?;
                info!(
                    techniques = catalog.techniques.len(),
                    weapons = catalog.weapons.len(),
                    "Loaded technique catalog from {}",
                    path.display()
                );
                Box::new(catalog)
            }
            (None, _) => {
                info!("Using compiled-in technique catalog");
                Box::new(StaticCatalog::new())
            }
        };

        info!(
            max_points = config.max_points,
            include_common = config.include_common,
            schema_version = catalog.schema_version(),
            "Build session ready"
        );

        Ok(BuildSession::new(catalog, config))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
