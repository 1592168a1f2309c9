use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador opaco respaldado por un UUID v4.
///
/// La identidad de las entidades del dominio es por id, nunca por valor:
/// dos canciones con el mismo nombre tienen ids distintos.
macro_rules! uuid_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un nuevo identificador único.
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }

      pub fn from_uuid(u: Uuid) -> Self {
        $name(u)
      }

      /// Devuelve el `Uuid` interno.
      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(u: Uuid) -> Self {
        $name(u)
      }
    }

    impl From<$name> for Uuid {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

uuid_id!(
  /// Identificador de un artista.
  ArtistId
);

uuid_id!(
  /// Identificador de un álbum.
  AlbumId
);

uuid_id!(
  /// Identificador de una canción.
  ///
  /// Es lo que guardan playlists, favoritos y valoraciones en lugar de
  /// una referencia a la canción.
  SongId
);

uuid_id!(
  /// Identificador de un usuario.
  UserId
);

uuid_id!(PlaylistId);
