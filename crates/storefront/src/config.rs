use std::path::PathBuf;

use anyhow::Context;

use printmart_catalog::{Catalog, CatalogEntry};

use crate::cli::Args;

pub const CATALOG_ENV: &str = "PRINTMART_CATALOG";
pub const CURRENCY_ENV: &str = "PRINTMART_CURRENCY";
const DEFAULT_CURRENCY: &str = "Rp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_path: Option<PathBuf>,
    pub currency: String,
    pub plain: bool,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source (the process environment in
    /// production, a closure in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let currency = lookup(CURRENCY_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Self {
            catalog_path,
            currency,
            plain: false,
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(path) = &args.catalog {
            self.catalog_path = Some(path.clone());
        }
        if let Some(currency) = &args.currency {
            self.currency = currency.clone();
        }
        self.plain |= args.plain;
        self
    }

    /// The configured catalog file, or the built-in print shop range.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::print_shop()?);
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("catalog file {} is not valid JSON", path.display()))?;
        let catalog = Catalog::from_entries(entries)
            .with_context(|| format!("catalog file {} was rejected", path.display()))?;

        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded from file");
        Ok(catalog)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
