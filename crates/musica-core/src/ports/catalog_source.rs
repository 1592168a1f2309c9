use crate::catalog::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("io error: {0}")]
  Io(String),

  #[error("parse error: {0}")]
  Parse(String),

  #[error("invalid catalog: {0}")]
  Invalid(String),
}

/// Port que abstrae de dónde sale el catálogo inicial.
///
/// El dominio nunca añade álbumes ni canciones a un artista ya creado:
/// toda la población ocurre aquí, al construir el catálogo.
///
/// Implementaciones posibles:
/// - fichero TOML de semilla
/// - fixtures en memoria para tests
pub trait CatalogSource {
  fn load_catalog(&self) -> Result<Catalog, SourceError>;
}
