use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables overriding the configuration, ex. `HEXGRID__RADIUS`.
pub const HEX_GRID_ENV_PREFIX: &str = "HEXGRID";

/// The configuration of a hexagonal grid
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HexGridConfig {
    pub radius: i32,
}

impl HexGridConfig {
    pub fn new(radius: i32) -> Self {
        Self { radius }
    }

    /// Load the configuration from a json document with the environment layered on top of it.
    pub fn load(json: &str) -> Result<Self, ConfigError> {
        log::debug!("Loading hex grid configuration...");

        let s = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .add_source(
                Environment::with_prefix(HEX_GRID_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let cfg: HexGridConfig = s.try_deserialize()?;

        log::debug!("hex grid configuration: {:#?}", cfg);
        Ok(cfg)
    }
}
