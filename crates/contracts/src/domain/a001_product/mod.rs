pub mod aggregate;

pub use aggregate::{CatalogResponse, Product};
