use tracing::debug;

use crate::domain::artist::Artist;
use crate::domain::ids::{ArtistId, PlaylistId, SongId, UserId};
use crate::domain::song::Song;
use crate::domain::user::User;
use crate::errors::CoreError;

/// Catálogo en memoria: artistas (con sus álbumes y canciones) y usuarios.
///
/// Es el único sitio donde se resuelven ids entre entidades distintas
/// (un usuario valorando una canción, una playlist apuntando a otra).
#[derive(Debug, Default, PartialEq)]
pub struct Catalog {
  artists: Vec<Artist>,
  users: Vec<User>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  // -------- COMMAND (write) --------

  /// Las entidades no son `Clone` ni `Deserialize`, así que cada `Artist`
  /// trae un id que no puede estar ya en el catálogo.
  pub fn add_artist(&mut self, artist: Artist) -> ArtistId {
    let id = artist.id();
    debug!(artist = %id, songs = artist.song_count(), "artist added to catalog");
    self.artists.push(artist);
    id
  }

  /// Igual que en [`Catalog::add_artist`]: el id del usuario es único por
  /// construcción.
  pub fn register_user(&mut self, user: User) -> UserId {
    let id = user.id();
    debug!(user = %id, login = user.login(), "user registered");
    self.users.push(user);
    id
  }

  pub fn rate_song(&mut self, user_id: UserId, song_id: SongId, stars: i32) -> Result<(), CoreError> {
    find_user(&self.users, user_id)?;
    let song = find_song_mut(&mut self.artists, song_id)?;
    song.rate(user_id, stars);
    Ok(())
  }

  pub fn favorite_song(&mut self, user_id: UserId, song_id: SongId) -> Result<(), CoreError> {
    let song = find_song(&self.artists, song_id)?;
    find_user_mut(&mut self.users, user_id)?.favorite(song);
    Ok(())
  }

  pub fn play_song(&mut self, user_id: UserId, song_id: SongId) -> Result<(), CoreError> {
    let song = find_song(&self.artists, song_id)?;
    find_user_mut(&mut self.users, user_id)?.listen(song);
    Ok(())
  }

  pub fn create_playlist(&mut self, user_id: UserId, name: &str) -> Result<PlaylistId, CoreError> {
    Ok(find_user_mut(&mut self.users, user_id)?.create_named_playlist(name))
  }

  pub fn add_to_playlist(
    &mut self,
    user_id: UserId,
    playlist_id: PlaylistId,
    song_id: SongId,
  ) -> Result<(), CoreError> {
    let song = find_song(&self.artists, song_id)?;
    let user = find_user_mut(&mut self.users, user_id)?;
    let playlist = user.playlist_mut(playlist_id).ok_or(CoreError::PlaylistNotFound(playlist_id))?;
    playlist.add_song(song);
    Ok(())
  }

  /// Quita la canción de la playlist. `Ok(false)` si no estaba.
  pub fn remove_from_playlist(
    &mut self,
    user_id: UserId,
    playlist_id: PlaylistId,
    song_id: SongId,
  ) -> Result<bool, CoreError> {
    let song = find_song(&self.artists, song_id)?;
    let user = find_user_mut(&mut self.users, user_id)?;
    let playlist = user.playlist_mut(playlist_id).ok_or(CoreError::PlaylistNotFound(playlist_id))?;
    Ok(playlist.remove_song(song))
  }

  // -------- QUERY (read) --------

  pub fn artists(&self) -> &[Artist] {
    &self.artists
  }

  pub fn users(&self) -> &[User] {
    &self.users
  }

  pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
    self.artists.iter().find(|a| a.id() == id)
  }

  pub fn user(&self, id: UserId) -> Option<&User> {
    self.users.iter().find(|u| u.id() == id)
  }

  pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
    self.users.iter_mut().find(|u| u.id() == id)
  }

  pub fn song(&self, id: SongId) -> Option<&Song> {
    self.artists.iter().find_map(|a| a.song(id))
  }

  pub fn song_mut(&mut self, id: SongId) -> Option<&mut Song> {
    self.artists.iter_mut().find_map(|a| a.song_mut(id))
  }

  pub fn songs(&self) -> impl Iterator<Item = &Song> {
    self.artists.iter().flat_map(|a| a.songs())
  }

  pub fn song_count(&self) -> usize {
    self.artists.iter().map(Artist::song_count).sum()
  }

  /// Primer usuario cuyas credenciales coinciden.
  pub fn authenticate(&self, login: &str, password: &str) -> Option<&User> {
    self.users.iter().find(|u| u.verify_login(login, password))
  }

  pub fn now_playing(&self, user_id: UserId) -> Option<&Song> {
    self.user(user_id)?.currently_playing().and_then(|id| self.song(id))
  }
}

fn find_song(artists: &[Artist], id: SongId) -> Result<&Song, CoreError> {
  artists.iter().find_map(|a| a.song(id)).ok_or(CoreError::SongNotFound(id))
}

fn find_song_mut(artists: &mut [Artist], id: SongId) -> Result<&mut Song, CoreError> {
  artists.iter_mut().find_map(|a| a.song_mut(id)).ok_or(CoreError::SongNotFound(id))
}

fn find_user(users: &[User], id: UserId) -> Result<&User, CoreError> {
  users.iter().find(|u| u.id() == id).ok_or(CoreError::UserNotFound(id))
}

fn find_user_mut(users: &mut [User], id: UserId) -> Result<&mut User, CoreError> {
  users.iter_mut().find(|u| u.id() == id).ok_or(CoreError::UserNotFound(id))
}
