use std::fmt;

use musica_core::services::CatalogReport;

/// Resumen en texto plano, una línea por artista y por canción.
pub struct TextReport<'a>(pub &'a CatalogReport);

impl fmt::Display for TextReport<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for artist in &self.0.artists {
      writeln!(f, "{} ({} albums, {} songs)", artist.stage_name, artist.album_count, artist.song_count)?;

      for song in &artist.songs {
        write!(f, "  {} {} avg ", song.stats.average, song.name)?;
        match song.stats.average.value() {
          Some(avg) => write!(f, "{avg:.2}")?,
          None => f.write_str("-")?,
        }
        writeln!(f, " ({} ratings)", song.stats.ratings)?;
      }
    }

    writeln!(f, "{} users", self.0.users)
  }
}
