use musica_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[catalog]` de musica.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
  /// Fichero TOML con artistas, álbumes y usuarios iniciales.
  pub seed_file: PathBuf,
}

impl Default for CatalogConfig {
  fn default() -> Self {
    CatalogConfig { seed_file: PATHS.default_seed_file() }
  }
}

impl CatalogConfig {
  /// Carga la sección y la vuelve a escribir, dejando los valores por
  /// defecto visibles en el fichero.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = Self::load_from(&CONFIG_BACKEND)?;
    CONFIG_BACKEND.save_section("catalog", &cfg)?;
    Ok(cfg)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    match backend.load_section_with_default::<Option<CatalogConfig>>("catalog")? {
      Some(cfg) => Ok(cfg),
      None => Ok(CatalogConfig { seed_file: backend.paths().default_seed_file() }),
    }
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("catalog", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use musica_config::MusicaPaths;
  use tempfile::tempdir;

  #[test]
  fn default_seed_file_follows_backend_paths() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(MusicaPaths::at(tmp.path()).unwrap());

    let cfg = CatalogConfig::load_from(&backend).unwrap();

    assert_eq!(cfg.seed_file, tmp.path().join("data").join("catalog.toml"));
  }

  #[test]
  fn saved_seed_file_is_read_back() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(MusicaPaths::at(tmp.path()).unwrap());
    let cfg = CatalogConfig { seed_file: tmp.path().join("bowie.toml") };
    backend.save_section("catalog", &cfg).unwrap();

    assert_eq!(CatalogConfig::load_from(&backend).unwrap(), cfg);
  }
}
