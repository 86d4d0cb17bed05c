pub mod endpoint;
pub mod fetch;
pub mod parse;
pub mod query;

use std::path::Path;

use hiscores_core::HiscoresConfig;
use tracing::{info, warn};

/// Load the config file, falling back to defaults if it is missing or invalid.
pub fn load_config(path: &Path) -> HiscoresConfig {
    if !path.exists() {
        return HiscoresConfig::default();
    }
    match HiscoresConfig::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            HiscoresConfig::default()
        }
    }
}
