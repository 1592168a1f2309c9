use serde::Serialize;

use crate::domain::ids::{AlbumId, SongId};
use crate::domain::song::Song;

/// Un álbum: colección titulada y fechada de canciones.
///
/// Es dueño de sus canciones. Una vez construido no se le pueden añadir
/// ni quitar canciones; quien carga el catálogo las entrega con
/// [`Album::with_songs`].
#[derive(Debug, PartialEq, Serialize)]
pub struct Album {
  id: AlbumId,
  title: String,
  release_year: i32,
  songs: Vec<Song>,
}

impl Album {
  pub fn new(title: impl Into<String>, release_year: i32) -> Self {
    Self { id: AlbumId::new(), title: title.into(), release_year, songs: Vec::new() }
  }

  pub fn with_songs(mut self, songs: Vec<Song>) -> Self {
    self.songs = songs;
    self
  }

  pub fn id(&self) -> AlbumId {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn release_year(&self) -> i32 {
    self.release_year
  }

  pub fn songs(&self) -> &[Song] {
    &self.songs
  }

  pub fn song_count(&self) -> usize {
    self.songs.len()
  }

  pub fn song(&self, id: SongId) -> Option<&Song> {
    self.songs.iter().find(|s| s.id() == id)
  }

  pub fn song_mut(&mut self, id: SongId) -> Option<&mut Song> {
    self.songs.iter_mut().find(|s| s.id() == id)
  }
}
