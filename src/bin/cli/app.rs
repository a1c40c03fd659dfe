use std::path::Path;

use anyhow::{bail, Context, Result};

use jarman_lib::catalog::{self, Catalog, Word};
use jarman_lib::config::AppConfig;
use jarman_lib::progress::ProgressStore;
use jarman_lib::storage::FileStore;

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub progress: ProgressStore<FileStore>,
    catalog: Option<Catalog>,
}

impl App {
    /// Load config, open the data directory and the word catalog (if any)
    pub fn new(
        config_path: Option<&Path>,
        data_dir: Option<&Path>,
        catalog_path: Option<&Path>,
    ) -> Result<Self> {
        let config = AppConfig::load(config_path).context("Failed to load config")?;

        let data_dir = config
            .resolve_data_dir(data_dir)
            .context("Failed to get data directory")?;
        let store = FileStore::new(data_dir);
        store.init().context("Failed to initialize data directory")?;
        log::debug!("Using data directory {:?}", store.base_path());

        let catalog = match config.resolve_catalog(catalog_path) {
            Some(path) => Some(
                Catalog::from_path(&path)
                    .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            ),
            None => None,
        };

        Ok(Self {
            config,
            progress: ProgressStore::new(store),
            catalog,
        })
    }

    /// The word catalog; commands that browse words cannot run without one
    pub fn catalog(&self) -> Result<&Catalog> {
        match &self.catalog {
            Some(catalog) => Ok(catalog),
            None => bail!(
                "No word catalog configured. Pass --catalog or set `catalog` in {}",
                catalog_hint()
            ),
        }
    }

    /// Look up a catalog word, if a catalog is loaded
    pub fn word(&self, id: &str) -> Option<&Word> {
        self.catalog.as_ref().and_then(|c| c.get(id))
    }

    /// Saved level if the catalog has it, else the configured default, else
    /// the first level the catalog offers
    pub fn current_level(&self) -> Result<String> {
        let saved = self.progress.settings().selected_level();
        self.catalog()?
            .resolve_level(saved.as_deref(), self.config.default_level())
            .context("The word catalog is empty")
    }

    /// Validate a level against the catalog when one is loaded
    pub fn check_level(&self, level: &str) -> Result<String> {
        let level = catalog::normalize_level(level).to_uppercase();
        if !catalog::LEVEL_ORDER.contains(&level.as_str()) {
            bail!(
                "Unknown level '{}'. Expected one of: {}",
                level,
                catalog::LEVEL_ORDER.join(", ")
            );
        }
        if let Some(catalog) = &self.catalog {
            if !catalog.level_options().contains(&level.as_str()) {
                bail!("The word catalog has no words for level {}", level);
            }
        }
        Ok(level)
    }
}

fn catalog_hint() -> String {
    AppConfig::default_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| jarman_lib::config::CONFIG_FILE_NAME.to_string())
}
