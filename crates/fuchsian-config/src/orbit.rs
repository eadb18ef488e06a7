// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fuchsian_orbit::OrbitConfig;
use tracing::debug;

use crate::service::{ConfigError, ConfigService, ConfigStore};

/// Store key of the engine configuration document.
pub const ORBIT_CONFIG_KEY: &str = "orbit";

/// Loads the stored engine configuration, or the default when none is
/// stored. A stored document must pass [`OrbitConfig::validate`].
pub fn load_orbit_config<S: ConfigStore>(
    service: &ConfigService<S>,
) -> Result<OrbitConfig, ConfigError> {
    match service.load::<OrbitConfig>(ORBIT_CONFIG_KEY)? {
        Some(config) => {
            config.validate()?;
            Ok(config)
        }
        None => {
            debug!(key = ORBIT_CONFIG_KEY, "no stored orbit config; using defaults");
            Ok(OrbitConfig::default())
        }
    }
}

/// Validates and persists `config`.
pub fn save_orbit_config<S: ConfigStore>(
    service: &ConfigService<S>,
    config: &OrbitConfig,
) -> Result<(), ConfigError> {
    config.validate()?;
    service.save(ORBIT_CONFIG_KEY, config)
}
