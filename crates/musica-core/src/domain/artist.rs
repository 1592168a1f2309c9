use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::album::Album;
use crate::domain::ids::{ArtistId, SongId};
use crate::domain::song::Song;

/// Representa a un artista dentro del sistema.
///
/// Es dueño de sus álbumes y de sus canciones sueltas (las que no
/// pertenecen a ningún álbum). Ninguna de las dos colecciones cambia
/// tras la construcción; el loader del catálogo las llena con
/// [`Artist::with_albums`] y [`Artist::with_solo_songs`].
#[derive(Debug, PartialEq, Serialize)]
pub struct Artist {
  /// Identificador único del artista.
  id: ArtistId,

  /// Nombre artístico.
  stage_name: String,

  /// Nombre real.
  real_name: String,

  birth_date: NaiveDate,

  albums: Vec<Album>,

  /// Canciones sin álbum.
  solo_songs: Vec<Song>,
}

impl Artist {
  pub fn new(stage_name: impl Into<String>, real_name: impl Into<String>, birth_date: NaiveDate) -> Self {
    Self {
      id: ArtistId::new(),
      stage_name: stage_name.into(),
      real_name: real_name.into(),
      birth_date,
      albums: Vec::new(),
      solo_songs: Vec::new(),
    }
  }

  pub fn with_albums(mut self, albums: Vec<Album>) -> Self {
    self.albums = albums;
    self
  }

  pub fn with_solo_songs(mut self, songs: Vec<Song>) -> Self {
    self.solo_songs = songs;
    self
  }

  pub fn id(&self) -> ArtistId {
    self.id
  }

  pub fn stage_name(&self) -> &str {
    &self.stage_name
  }

  pub fn real_name(&self) -> &str {
    &self.real_name
  }

  pub fn birth_date(&self) -> NaiveDate {
    self.birth_date
  }

  pub fn albums(&self) -> &[Album] {
    &self.albums
  }

  pub fn solo_songs(&self) -> &[Song] {
    &self.solo_songs
  }

  pub fn album_count(&self) -> usize {
    self.albums.len()
  }

  /// Canciones sueltas más las canciones de cada álbum.
  pub fn song_count(&self) -> usize {
    self.solo_songs.len() + self.albums.iter().map(Album::song_count).sum::<usize>()
  }

  /// Todas las canciones del artista: primero las sueltas, luego las de
  /// cada álbum en orden.
  pub fn songs(&self) -> impl Iterator<Item = &Song> {
    self.solo_songs.iter().chain(self.albums.iter().flat_map(|a| a.songs().iter()))
  }

  pub fn song(&self, id: SongId) -> Option<&Song> {
    self.songs().find(|s| s.id() == id)
  }

  pub fn song_mut(&mut self, id: SongId) -> Option<&mut Song> {
    if let Some(song) = self.solo_songs.iter_mut().find(|s| s.id() == id) {
      return Some(song);
    }

    self.albums.iter_mut().find_map(|a| a.song_mut(id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::UserId;

  fn bowie() -> Artist {
    Artist::new("David Bowie", "David Robert Jones", NaiveDate::from_ymd_opt(1947, 1, 8).unwrap())
  }

  fn album(title: &str, songs: usize) -> Album {
    Album::new(title, 1977).with_songs((0..songs).map(|i| Song::new(format!("{title} {i}"))).collect())
  }

  #[test]
  fn song_count_adds_solo_songs_and_albums() {
    let artist = bowie()
      .with_solo_songs(vec![Song::new("Under Pressure")])
      .with_albums(vec![album("Low", 3), album("Heroes", 2)]);

    assert_eq!(artist.album_count(), 2);
    assert_eq!(artist.song_count(), 6);
    assert_eq!(artist.songs().count(), 6);
  }

  #[test]
  fn new_artist_is_empty() {
    let artist = bowie();

    assert_eq!(artist.stage_name(), "David Bowie");
    assert_eq!(artist.real_name(), "David Robert Jones");
    assert_eq!(artist.birth_date().to_string(), "1947-01-08");
    assert_eq!(artist.album_count(), 0);
    assert_eq!(artist.song_count(), 0);
  }

  #[test]
  fn songs_iterate_solo_songs_first() {
    let artist = bowie().with_solo_songs(vec![Song::new("Solo")]).with_albums(vec![album("Low", 1)]);

    let names: Vec<&str> = artist.songs().map(Song::name).collect();
    assert_eq!(names, ["Solo", "Low 0"]);
  }

  #[test]
  fn song_mut_reaches_album_songs() {
    let mut artist = bowie().with_albums(vec![album("Low", 2)]);
    let id = artist.albums()[0].songs()[1].id();

    artist.song_mut(id).expect("song in album").rate(UserId::new(), 4);

    assert_eq!(artist.song(id).map(|s| s.ratings().len()), Some(1));
    assert!(artist.song_mut(Song::new("Low 1").id()).is_none());
  }
}
