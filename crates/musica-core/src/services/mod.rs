pub mod catalog_service;

pub use catalog_service::{ArtistReport, CatalogReport, CatalogService, SongReport};
