mod backend;
mod io;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use model::LogConfig;
pub use paths::{ConfigError, MusicaPaths};

use once_cell::sync::Lazy;

// Singleton de paths (MUSICA_BASE_DIR / system)
pub static PATHS: Lazy<MusicaPaths> = Lazy::new(|| MusicaPaths::detect().expect("failed to init MusicaPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
