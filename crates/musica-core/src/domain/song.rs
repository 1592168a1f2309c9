use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::ids::{SongId, UserId};
use crate::domain::rating::{AvgRating, Rating, STAR_RANGE};
use crate::domain::song_stats::SongStats;
use crate::errors::CoreError;

/// La Canción (Song): la unidad reproducible del catálogo.
///
/// Es dueña de sus valoraciones, que se conservan en orden de inserción.
#[derive(Debug, PartialEq, Serialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  id: SongId,
  /// El nombre de la canción.
  name: String,
  /// Valoraciones recibidas, en el orden en que llegaron.
  ratings: Vec<Rating>,
}

impl Song {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: SongId::new(), name: name.into(), ratings: Vec::new() }
  }

  pub fn id(&self) -> SongId {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn ratings(&self) -> &[Rating] {
    &self.ratings
  }

  /// Añade una valoración de `reviewer`.
  ///
  /// No reemplaza valoraciones previas del mismo usuario: volver a valorar
  /// deja ambas entradas y las dos cuentan para la media. Siempre devuelve
  /// `true`.
  pub fn rate(&mut self, reviewer: UserId, stars: i32) -> bool {
    if !STAR_RANGE.contains(&stars) {
      warn!(song = %self.id, %reviewer, stars, "stars outside the expected range");
    }

    self.ratings.push(Rating::new(stars, reviewer, self.id));
    debug!(song = %self.id, %reviewer, stars, total = self.ratings.len(), "song rated");
    true
  }

  /// Media aritmética de las estrellas de todas las valoraciones.
  ///
  /// Falla con [`CoreError::EmptyRatings`] si la canción no tiene ninguna.
  pub fn average_rating(&self) -> Result<f32, CoreError> {
    if self.ratings.is_empty() {
      return Err(CoreError::EmptyRatings(self.id));
    }

    let sum: f32 = self.ratings.iter().map(|r| r.stars() as f32).sum();
    Ok(sum / self.ratings.len() as f32)
  }

  /// Valoración de `reviewer`, o `None` si nunca valoró la canción.
  ///
  /// Si hay varias, devuelve la última.
  pub fn rating_by_user(&self, reviewer: UserId) -> Option<&Rating> {
    self.ratings.iter().rev().find(|r| r.reviewer() == reviewer)
  }

  pub fn stats(&self) -> SongStats {
    let average = match self.average_rating() {
      Ok(avg) => AvgRating::Rated(avg),
      Err(_) => AvgRating::Unrated,
    };

    SongStats { average, ratings: self.ratings.len() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn average_of_two_ratings() {
    let mut song = Song::new("Heroes");
    song.rate(UserId::new(), 5);
    song.rate(UserId::new(), 2);

    assert_eq!(song.average_rating().unwrap(), 3.5);
  }

  #[test]
  fn average_without_ratings_fails() {
    let song = Song::new("Silence");

    match song.average_rating() {
      Err(CoreError::EmptyRatings(id)) => assert_eq!(id, song.id()),
      other => panic!("expected EmptyRatings, got {other:?}"),
    }
  }

  #[test]
  fn rerating_keeps_both_entries_and_lookup_returns_last() {
    let user = UserId::new();
    let mut song = Song::new("Changes");

    assert!(song.rate(user, 4));
    assert!(song.rate(user, 2));

    assert_eq!(song.ratings().len(), 2);
    assert_eq!(song.rating_by_user(user).map(Rating::stars), Some(2));
    assert_eq!(song.average_rating().unwrap(), 3.0);
  }

  #[test]
  fn lookup_for_unknown_user_is_none() {
    let mut song = Song::new("Fame");
    song.rate(UserId::new(), 4);

    assert!(song.rating_by_user(UserId::new()).is_none());
  }

  #[test]
  fn ratings_point_back_to_their_song() {
    let mut song = Song::new("Ashes to Ashes");
    song.rate(UserId::new(), 1);

    assert_eq!(song.ratings()[0].song(), Some(song.id()));
  }

  #[test]
  fn songs_with_same_name_are_distinct() {
    let a = Song::new("Starman");
    let b = Song::new("Starman");

    assert_ne!(a.id(), b.id());
    assert_ne!(a, b);
  }

  #[test]
  fn lookalike_users_get_their_own_ratings() {
    use crate::domain::user::User;

    let ana = User::new("ana", "pw");
    let twin = User::new("ana", "pw");
    let mut song = Song::new("Heroes");

    song.rate(ana.id(), 5);
    song.rate(twin.id(), 1);

    assert_eq!(song.rating_by_user(ana.id()).map(Rating::stars), Some(5));
    assert_eq!(song.rating_by_user(twin.id()).map(Rating::stars), Some(1));
  }

  #[test]
  fn out_of_range_stars_are_accepted() {
    let mut song = Song::new("Loud");
    assert!(song.rate(UserId::new(), 11));
    assert_eq!(song.average_rating().unwrap(), 11.0);
  }

  #[test]
  fn stats_of_unrated_song() {
    let stats = Song::new("Quiet").stats();
    assert_eq!(stats.average, AvgRating::Unrated);
    assert_eq!(stats.ratings, 0);
  }

  proptest! {
    #[test]
    fn average_is_mean_in_any_order(stars in prop::collection::vec(1i32..=5, 1..50)) {
      let mut forward = Song::new("forward");
      let mut backward = Song::new("backward");
      for s in &stars {
        forward.rate(UserId::new(), *s);
      }
      for s in stars.iter().rev() {
        backward.rate(UserId::new(), *s);
      }

      let expected = stars.iter().sum::<i32>() as f32 / stars.len() as f32;
      prop_assert_eq!(forward.average_rating().unwrap(), expected);
      prop_assert_eq!(backward.average_rating().unwrap(), expected);
    }
  }
}
