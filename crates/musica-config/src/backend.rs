use crate::io::atomic_write_str;
use crate::paths::{ConfigError, MusicaPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

// toml_edit para escritura preservando comentarios
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: MusicaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: MusicaPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &MusicaPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero si falta el fichero o la
  /// sección devuelve `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %path.display(), section, "config file missing, using defaults");
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let root: toml::Table = toml::from_str(&content)?;

    let Some(table) = root.get(section) else {
      return Ok(T::default());
    };

    table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let root: toml::Table = toml::from_str(&content)?;

    let table = root
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` normal (serde) y reparsearla.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 3) Reemplazar sólo esa sección; el resto del documento queda intacto.
    doc[section] = Item::Table(section_doc.as_table().clone());

    atomic_write_str(&path, &doc.to_string())?;
    debug!(path = %path.display(), section, "config section saved");

    Ok(())
  }
}
