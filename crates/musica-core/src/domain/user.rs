use serde::Serialize;
use tracing::debug;

use crate::domain::ids::{PlaylistId, SongId, UserId};
use crate::domain::playlist::Playlist;
use crate::domain::song::Song;

/// Una cuenta de usuario.
///
/// Es dueña de sus playlists. Favoritos y la canción en reproducción se
/// guardan por id.
///
/// La contraseña se guarda en claro y se compara tal cual: sirve para
/// ilustrar el flujo de login, no es un mecanismo seguro. Nunca se
/// serializa.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct User {
  id: UserId,
  login: String,
  #[serde(skip_serializing)]
  password: String,
  playlists: Vec<Playlist>,
  favorites: Vec<SongId>,
  currently_playing: Option<SongId>,
}

impl User {
  pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      id: UserId::new(),
      login: login.into(),
      password: password.into(),
      playlists: Vec::new(),
      favorites: Vec::new(),
      currently_playing: None,
    }
  }

  pub fn id(&self) -> UserId {
    self.id
  }

  pub fn login(&self) -> &str {
    &self.login
  }

  /// Compara nombre y contraseña por valor exacto.
  pub fn verify_login(&self, name: &str, password: &str) -> bool {
    self.login == name && self.password == password
  }

  /// Marca la canción como favorita. No deduplica; siempre devuelve `true`.
  pub fn favorite(&mut self, song: &Song) -> bool {
    self.favorites.push(song.id());
    debug!(user = %self.id, song = %song.id(), "song favorited");
    true
  }

  pub fn favorites(&self) -> &[SongId] {
    &self.favorites
  }

  /// Pasa a reproducir `song`, reemplazando la anterior.
  pub fn listen(&mut self, song: &Song) -> bool {
    self.currently_playing = Some(song.id());
    debug!(user = %self.id, song = %song.id(), "now playing");
    true
  }

  pub fn currently_playing(&self) -> Option<SongId> {
    self.currently_playing
  }

  /// Crea una playlist vacía y sin nombre al final de la colección.
  pub fn create_playlist(&mut self) -> bool {
    self.push_playlist(Playlist::new());
    true
  }

  pub fn create_named_playlist(&mut self, name: impl Into<String>) -> PlaylistId {
    self.push_playlist(Playlist::named(name))
  }

  fn push_playlist(&mut self, playlist: Playlist) -> PlaylistId {
    let id = playlist.id();
    self.playlists.push(playlist);
    debug!(user = %self.id, playlist = %id, "playlist created");
    id
  }

  pub fn playlists(&self) -> &[Playlist] {
    &self.playlists
  }

  pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
    self.playlists.iter().find(|p| p.id() == id)
  }

  pub fn playlist_mut(&mut self, id: PlaylistId) -> Option<&mut Playlist> {
    self.playlists.iter_mut().find(|p| p.id() == id)
  }
}
