pub mod album;
pub mod artist;
pub mod ids;
pub mod playlist;
pub mod rating;
pub mod song;
pub mod song_stats;
pub mod user;

pub use ids::{AlbumId, ArtistId, PlaylistId, SongId, UserId};
