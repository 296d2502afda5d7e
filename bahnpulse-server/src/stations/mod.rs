//! Station reference data.
//!
//! Provides the immutable station lookup table the generator resolves
//! identifiers against. A built-in table of major German stations is
//! available, or one can be loaded from a JSON file at startup.

mod catalog;
mod error;

pub use catalog::StationCatalog;
pub use error::StationError;
