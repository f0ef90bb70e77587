pub mod commands;
pub mod config;
pub mod error;

use rewear_store::CatalogStore;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Open the catalog file given on the command line or in the config,
/// falling back to the bundled fixtures.
pub fn open_catalog(
    config: &CliConfig,
    path_override: Option<&std::path::Path>,
) -> CliResult<CatalogStore> {
    let store = match path_override.or(config.catalog_path.as_deref()) {
        Some(path) => CatalogStore::from_path(path)?,
        None => CatalogStore::with_fixtures()?,
    };
    Ok(store)
}
