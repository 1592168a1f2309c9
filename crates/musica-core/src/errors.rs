// crates/musica-core/src/errors.rs
use thiserror::Error;

use crate::domain::ids::{PlaylistId, SongId, UserId};

/// Error genérico del núcleo de Musica.
///
/// Las capas superiores (CLI, loaders, etc.) deberían mapear este error
/// a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  /// Se pidió la media de una canción sin valoraciones.
  #[error("song {0} has no ratings")]
  EmptyRatings(SongId),

  #[error("song not found: {0}")]
  SongNotFound(SongId),

  #[error("user not found: {0}")]
  UserNotFound(UserId),

  #[error("playlist not found: {0}")]
  PlaylistNotFound(PlaylistId),

  #[error("catalog source error: {0}")]
  Source(String),
}
