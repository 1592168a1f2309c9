pub mod adapter;
pub mod config;
pub mod seed;

pub use adapter::TomlCatalogSource;
pub use config::CatalogConfig;
pub use seed::{SeedError, parse_catalog};
