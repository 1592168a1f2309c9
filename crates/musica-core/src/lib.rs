#[cfg(test)]
#[macro_use]
mod test_support;

pub mod catalog;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod services;

pub use catalog::Catalog;
pub use errors::CoreError;
