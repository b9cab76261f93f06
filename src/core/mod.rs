pub mod error;
pub mod money;
pub mod words;

pub use error::{AppError, Result};
