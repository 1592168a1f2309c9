use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::domain::artist::Artist;
use crate::domain::song_stats::SongStats;
use crate::errors::CoreError;
use crate::ports::CatalogSource;

pub struct CatalogService<S>
where
  S: CatalogSource,
{
  source: S,
  catalog: Catalog,
}

impl<S> CatalogService<S>
where
  S: CatalogSource,
{
  /// Carga el catálogo desde `source` y se queda con ambos.
  pub fn load(source: S) -> Result<Self, CoreError> {
    let catalog = source.load_catalog().map_err(|e| CoreError::Source(e.to_string()))?;
    info!(artists = catalog.artists().len(), users = catalog.users().len(), "catalog loaded");
    Ok(Self { source, catalog })
  }

  /// Vuelve a leer la fuente, descartando los cambios hechos en memoria.
  pub fn reload(&mut self) -> Result<(), CoreError> {
    self.catalog = self.source.load_catalog().map_err(|e| CoreError::Source(e.to_string()))?;
    info!(artists = self.catalog.artists().len(), "catalog reloaded");
    Ok(())
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn catalog_mut(&mut self) -> &mut Catalog {
    &mut self.catalog
  }

  // -------- QUERY (read) --------

  pub fn report(&self) -> CatalogReport {
    CatalogReport {
      artists: self.catalog.artists().iter().map(ArtistReport::from).collect(),
      users: self.catalog.users().len(),
    }
  }
}

/// Resumen serializable del catálogo, pensado para la CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
  pub artists: Vec<ArtistReport>,
  pub users: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistReport {
  pub stage_name: String,
  pub album_count: usize,
  pub song_count: usize,
  pub songs: Vec<SongReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongReport {
  pub name: String,
  pub stats: SongStats,
}

impl From<&Artist> for ArtistReport {
  fn from(artist: &Artist) -> Self {
    ArtistReport {
      stage_name: artist.stage_name().to_string(),
      album_count: artist.album_count(),
      song_count: artist.song_count(),
      songs: artist.songs().map(|s| SongReport { name: s.name().to_string(), stats: s.stats() }).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::album::Album;
  use crate::domain::rating::AvgRating;
  use crate::domain::song::Song;
  use crate::domain::user::User;
  use crate::ports::SourceError;
  use chrono::NaiveDate;

  struct FixedSource;

  impl CatalogSource for FixedSource {
    fn load_catalog(&self) -> Result<Catalog, SourceError> {
      let artist = Artist::new("Nico", "Christa Päffgen", NaiveDate::from_ymd_opt(1938, 10, 16).unwrap())
        .with_albums(vec![Album::new("Chelsea Girl", 1967).with_songs(vec![Song::new("These Days")])]);

      let mut catalog = Catalog::new();
      catalog.add_artist(artist);
      catalog.register_user(User::new("lou", "pw"));
      Ok(catalog)
    }
  }

  struct BrokenSource;

  impl CatalogSource for BrokenSource {
    fn load_catalog(&self) -> Result<Catalog, SourceError> {
      Err(SourceError::Io("disk on fire".into()))
    }
  }

  #[test]
  fn report_summarises_artists_and_songs() {
    let mut service = CatalogService::load(FixedSource).unwrap();
    let user = service.catalog().users()[0].id();
    let song = service.catalog().songs().next().unwrap().id();
    service.catalog_mut().rate_song(user, song, 4).unwrap();

    let report = service.report();

    assert_eq!(report.users, 1);
    assert_eq!(report.artists.len(), 1);
    assert_eq!(report.artists[0].album_count, 1);
    assert_eq!(report.artists[0].song_count, 1);
    assert_eq!(report.artists[0].songs[0].stats, SongStats { average: AvgRating::Rated(4.0), ratings: 1 });
  }

  #[test]
  fn reload_discards_in_memory_changes() {
    let mut service = CatalogService::load(FixedSource).unwrap();
    let user = service.catalog().users()[0].id();
    let song = service.catalog().songs().next().unwrap().id();
    service.catalog_mut().rate_song(user, song, 5).unwrap();

    service.reload().unwrap();

    assert!(service.catalog().songs().all(|s| s.ratings().is_empty()));
  }

  #[test]
  fn source_errors_surface_as_core_errors() {
    match CatalogService::load(BrokenSource) {
      Err(CoreError::Source(msg)) => assert!(msg.contains("disk on fire")),
      Err(other) => panic!("unexpected error: {other}"),
      Ok(_) => panic!("expected an error"),
    }
  }
}
