#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod scoring;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use scoring::{Score, percent_rounded, score_answers};
pub use time::Clock;
