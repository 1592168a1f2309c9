use musica_config::LogConfig;
use musica_seed::CatalogConfig;
use serde::{Deserialize, Serialize};

/// Vista plana de la configuración para imprimirla como JSON.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigDto {
  pub seed_file: String,
  pub log_filter: String,
}

impl From<(CatalogConfig, LogConfig)> for ConfigDto {
  fn from((catalog, logging): (CatalogConfig, LogConfig)) -> Self {
    ConfigDto { seed_file: catalog.seed_file.to_string_lossy().to_string(), log_filter: logging.filter }
  }
}
