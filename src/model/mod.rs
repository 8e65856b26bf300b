//! Domain model types (pure).

pub mod error;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError, PaginationError};
pub use record::Record;
