use serde::Serialize;
use tracing::debug;

use crate::domain::ids::{PlaylistId, SongId};
use crate::domain::song::Song;

/// Lista ordenada de canciones que cura un usuario.
///
/// No es dueña de las canciones: sólo guarda sus ids. La misma canción
/// puede aparecer varias veces y en varias playlists.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Playlist {
  id: PlaylistId,
  name: Option<String>,
  songs: Vec<SongId>,
}

impl Playlist {
  /// Playlist vacía y sin nombre.
  pub fn new() -> Self {
    Self { id: PlaylistId::new(), name: None, songs: Vec::new() }
  }

  pub fn named(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), ..Self::new() }
  }

  pub fn id(&self) -> PlaylistId {
    self.id
  }

  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  pub fn songs(&self) -> &[SongId] {
    &self.songs
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }

  pub fn contains(&self, song: &Song) -> bool {
    self.songs.contains(&song.id())
  }

  /// Añade la canción al final. Los duplicados están permitidos, así que
  /// siempre devuelve `true`.
  pub fn add_song(&mut self, song: &Song) -> bool {
    self.songs.push(song.id());
    debug!(playlist = %self.id, song = %song.id(), "song added to playlist");
    true
  }

  /// Quita la primera aparición de la canción.
  ///
  /// Devuelve `false` si la canción no estaba en la playlist.
  pub fn remove_song(&mut self, song: &Song) -> bool {
    match self.songs.iter().position(|id| *id == song.id()) {
      Some(index) => {
        self.songs.remove(index);
        debug!(playlist = %self.id, song = %song.id(), "song removed from playlist");
        true
      }
      None => false,
    }
  }
}

impl Default for Playlist {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_then_remove_leaves_playlist_empty() {
    let song = Song::new("Life on Mars?");
    let mut playlist = Playlist::new();

    assert!(playlist.add_song(&song));
    assert!(playlist.remove_song(&song));
    assert!(playlist.is_empty());
  }

  #[test]
  fn removing_unknown_song_returns_false() {
    let mut playlist = Playlist::named("Road trip");
    playlist.add_song(&Song::new("Starman"));

    assert!(!playlist.remove_song(&Song::new("Kooks")));
    assert_eq!(playlist.len(), 1);
  }

  #[test]
  fn same_name_is_not_the_same_song() {
    let original = Song::new("Starman");
    let lookalike = Song::new("Starman");
    let mut playlist = Playlist::new();
    playlist.add_song(&original);

    assert!(!playlist.remove_song(&lookalike));
    assert!(playlist.contains(&original));
    assert!(!playlist.contains(&lookalike));
  }

  #[test]
  fn duplicates_are_removed_one_at_a_time() {
    let song = Song::new("Heroes");
    let other = Song::new("Helden");
    let mut playlist = Playlist::new();
    playlist.add_song(&song);
    playlist.add_song(&other);
    playlist.add_song(&song);

    assert!(playlist.remove_song(&song));
    assert_eq!(playlist.songs(), [other.id(), song.id()]);
  }

  #[test]
  fn names_are_optional() {
    assert_eq!(Playlist::new().name(), None);
    assert_eq!(Playlist::named("Gym").name(), Some("Gym"));
  }
}
