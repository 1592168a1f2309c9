use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use musica_config::ConfigError;
use musica_core::{Catalog, CoreError};
use musica_core::domain::album::Album;
use musica_core::domain::artist::Artist;
use musica_core::domain::song::Song;
use musica_core::domain::user::User;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("config error: {0}")]
  Config(#[from] ConfigError),

  #[error("invalid birth date {value:?} for artist {artist:?}: {source}")]
  InvalidDate {
    artist: String,
    value: String,
    #[source]
    source: chrono::ParseError,
  },

  #[error("rating references unknown user {0:?}")]
  UnknownUser(String),

  #[error("rating references unknown song {0:?}")]
  UnknownSong(String),

  #[error(transparent)]
  Core(#[from] CoreError),
}

/// Documento semilla tal como aparece en disco.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedDocument {
  artists: Vec<ArtistSeed>,
  users: Vec<UserSeed>,
  ratings: Vec<RatingSeed>,
}

#[derive(Debug, Deserialize)]
struct ArtistSeed {
  stage_name: String,
  real_name: String,
  /// `YYYY-MM-DD`
  birth_date: String,
  #[serde(default)]
  solo_songs: Vec<String>,
  #[serde(default)]
  albums: Vec<AlbumSeed>,
}

#[derive(Debug, Deserialize)]
struct AlbumSeed {
  title: String,
  release_year: i32,
  #[serde(default)]
  songs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UserSeed {
  login: String,
  password: String,
}

/// Valoración inicial. Usuario y canción se resuelven por nombre: gana el
/// primero que aparece en la semilla.
#[derive(Debug, Deserialize)]
struct RatingSeed {
  login: String,
  song: String,
  stars: i32,
}

/// Construye un [`Catalog`] a partir del texto TOML de una semilla.
///
/// Cada artista, álbum y canción recibe un id nuevo, así que cargar la
/// misma semilla dos veces produce catálogos con identidades distintas.
pub fn parse_catalog(content: &str) -> Result<Catalog, SeedError> {
  let doc: SeedDocument = toml::from_str(content)?;
  let mut catalog = Catalog::new();

  for seed in doc.artists {
    let birth_date = NaiveDate::parse_from_str(&seed.birth_date, "%Y-%m-%d").map_err(|source| {
      SeedError::InvalidDate { artist: seed.stage_name.clone(), value: seed.birth_date.clone(), source }
    })?;

    let albums = seed
      .albums
      .into_iter()
      .map(|a| Album::new(a.title, a.release_year).with_songs(songs(a.songs)))
      .collect();

    let artist = Artist::new(seed.stage_name, seed.real_name, birth_date)
      .with_solo_songs(songs(seed.solo_songs))
      .with_albums(albums);

    catalog.add_artist(artist);
  }

  for seed in doc.users {
    if catalog.users().iter().any(|u| u.login() == seed.login) {
      warn!(login = %seed.login, "duplicate login in seed, keeping both accounts");
    }
    catalog.register_user(User::new(seed.login, seed.password));
  }

  for seed in doc.ratings {
    let user_id = catalog
      .users()
      .iter()
      .find(|u| u.login() == seed.login)
      .map(User::id)
      .ok_or_else(|| SeedError::UnknownUser(seed.login.clone()))?;
    let song_id = catalog
      .songs()
      .find(|s| s.name() == seed.song)
      .map(Song::id)
      .ok_or_else(|| SeedError::UnknownSong(seed.song.clone()))?;

    catalog.rate_song(user_id, song_id, seed.stars)?;
  }

  debug!(artists = catalog.artists().len(), songs = catalog.song_count(), "seed parsed");
  Ok(catalog)
}

fn songs(names: Vec<String>) -> Vec<Song> {
  names.into_iter().map(Song::new).collect()
}
