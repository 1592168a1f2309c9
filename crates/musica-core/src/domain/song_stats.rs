use serde::{Deserialize, Serialize};

use crate::domain::rating::AvgRating;

/// Estadísticas de valoración de una canción.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SongStats {
  pub average: AvgRating,
  pub ratings: usize,
}
