pub mod catalog;
pub mod database;
pub mod error;
pub mod project;
pub mod types;

pub use error::CardslimError;
pub use types::*;

/// Standard result type for all catalog operations
pub type CardslimResult<T> = Result<T, CardslimError>;
