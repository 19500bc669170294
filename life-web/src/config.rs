use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use life_core::LifeConfig;
use log::{info, warn};

const CONFIG_KEY: &str = "cellular-life.config";

/// Reads the config from local storage, falling back to the defaults when it
/// is missing or invalid.
pub fn load() -> LifeConfig {
    let stored: Result<LifeConfig, StorageError> = LocalStorage::get(CONFIG_KEY);
    match stored {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("stored config is invalid ({err}), using defaults");
                LifeConfig::default()
            }
        },
        Err(StorageError::KeyNotFound(_)) => {
            info!("no stored config, using defaults");
            LifeConfig::default()
        }
        Err(err) => {
            warn!("cannot read stored config ({err}), using defaults");
            LifeConfig::default()
        }
    }
}

pub fn save(config: &LifeConfig) -> anyhow::Result<()> {
    LocalStorage::set(CONFIG_KEY, config)?;
    Ok(())
}
