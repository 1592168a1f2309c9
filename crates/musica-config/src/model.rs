use serde::{Deserialize, Serialize};

use crate::backend::{ConfigBackend, TomlConfigBackend};
use crate::paths::ConfigError;
use crate::CONFIG_BACKEND;

/// Sección `[logging]` de musica.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
  /// Directiva de `EnvFilter` (p. ej. `"info"` o `"musica_core=debug"`).
  #[serde(default = "default_filter")]
  pub filter: String,
}

fn default_filter() -> String {
  "info".into()
}

impl Default for LogConfig {
  fn default() -> Self {
    LogConfig { filter: default_filter() }
  }
}

impl LogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    backend.load_section_with_default("logging")
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("logging", self)
  }
}
