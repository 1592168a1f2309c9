use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::ids::{SongId, UserId};

/// Rango de estrellas esperado para una valoración.
///
/// No se aplica al crear una [`Rating`]: los valores fuera de rango se
/// aceptan tal cual y sólo se reportan en los logs.
pub const STAR_RANGE: RangeInclusive<i32> = 1..=5;

/// Valoración de un usuario sobre una canción.
///
/// Es un registro inmutable: una vez creada no hay forma de cambiar las
/// estrellas ni el revisor. El revisor y la canción se guardan por id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
  stars: i32,
  reviewer: UserId,
  song: Option<SongId>,
}

impl Rating {
  /// Crea una valoración ligada a la canción valorada.
  pub fn new(stars: i32, reviewer: UserId, song: SongId) -> Self {
    Self { stars, reviewer, song: Some(song) }
  }

  /// Variante sin canción asociada.
  pub fn unbound(stars: i32, reviewer: UserId) -> Self {
    Self { stars, reviewer, song: None }
  }

  pub fn stars(&self) -> i32 {
    self.stars
  }

  pub fn reviewer(&self) -> UserId {
    self.reviewer
  }

  pub fn song(&self) -> Option<SongId> {
    self.song
  }

  /// Indica si las estrellas caen dentro de [`STAR_RANGE`].
  pub fn is_in_range(&self) -> bool {
    STAR_RANGE.contains(&self.stars)
  }
}

/// Calificación promedio de una canción.
///
/// Distingue explícitamente entre:
/// - [`AvgRating::Unrated`]: nadie ha puntuado la canción.
/// - [`AvgRating::Rated`]: existe al menos una valoración registrada.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum AvgRating {
  #[default]
  Unrated,
  Rated(f32),
}

impl AvgRating {
  pub fn value(&self) -> Option<f32> {
    match self {
      AvgRating::Unrated => None,
      AvgRating::Rated(avg) => Some(*avg),
    }
  }
}

impl fmt::Display for AvgRating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // floor: 4.9 sigue siendo ★★★★☆, sólo 5.0 llega a cinco estrellas.
    let full_stars = match self {
      AvgRating::Unrated => 0,
      AvgRating::Rated(avg) => avg.floor().clamp(0.0, 5.0) as usize,
    };

    for _ in 0..full_stars {
      write!(f, "★")?;
    }
    for _ in full_stars..5 {
      write!(f, "☆")?;
    }

    Ok(())
  }
}
