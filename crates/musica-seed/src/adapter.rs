use std::path::{Path, PathBuf};

use tracing::info;

use musica_core::Catalog;
use musica_core::ports::{CatalogSource, SourceError};

use crate::config::CatalogConfig;
use crate::seed::{SeedError, parse_catalog};

/// Implementación de `CatalogSource` que lee una semilla TOML de disco.
#[derive(Debug, Clone)]
pub struct TomlCatalogSource {
  path: PathBuf,
}

impl TomlCatalogSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Usa el `seed_file` de la sección `[catalog]`.
  pub fn from_config() -> Result<Self, SeedError> {
    let cfg = CatalogConfig::load()?;
    Ok(Self::new(cfg.seed_file))
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn read(&self) -> Result<Catalog, SeedError> {
    let content = std::fs::read_to_string(&self.path)?;
    parse_catalog(&content)
  }
}

impl CatalogSource for TomlCatalogSource {
  fn load_catalog(&self) -> Result<Catalog, SourceError> {
    let catalog = self.read().map_err(|e| map_seed_error(&self.path, e))?;
    info!(path = %self.path.display(), artists = catalog.artists().len(), "seed loaded");
    Ok(catalog)
  }
}

fn map_seed_error(path: &Path, err: SeedError) -> SourceError {
  match err {
    SeedError::Io(e) => SourceError::Io(format!("{}: {e}", path.display())),
    SeedError::Toml(e) => SourceError::Parse(format!("{}: {e}", path.display())),
    e @ SeedError::InvalidDate { .. } => SourceError::Invalid(e.to_string()),
    e @ (SeedError::UnknownUser(_) | SeedError::UnknownSong(_)) => SourceError::Invalid(e.to_string()),
    SeedError::Config(e) => SourceError::Invalid(e.to_string()),
    SeedError::Core(e) => SourceError::Invalid(e.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn loads_catalog_from_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("catalog.toml");
    std::fs::write(
      &path,
      "[[artists]]\nstage_name = \"Nico\"\nreal_name = \"Christa Päffgen\"\nbirth_date = \"1938-10-16\"\nsolo_songs = [\"These Days\"]\n",
    )
    .unwrap();

    let catalog = TomlCatalogSource::new(&path).load_catalog().unwrap();

    assert_eq!(catalog.song_count(), 1);
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let tmp = tempdir().unwrap();
    let source = TomlCatalogSource::new(tmp.path().join("nope.toml"));

    assert!(matches!(source.load_catalog(), Err(SourceError::Io(_))));
  }

  #[test]
  fn malformed_file_is_a_parse_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("catalog.toml");
    std::fs::write(&path, "[[artists]\n").unwrap();

    assert!(matches!(TomlCatalogSource::new(&path).load_catalog(), Err(SourceError::Parse(_))));
  }
}
