pub mod chapter;
pub mod error;
pub mod file_handler;
pub mod logging;

pub use error::AppError;
