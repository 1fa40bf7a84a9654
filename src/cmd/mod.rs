mod error;
mod util;

/// Path lookup and coercion command.
pub mod get;
/// Document summary command.
pub mod info;
/// Child listing command.
pub mod keys;
/// Path assignment command.
pub mod set;

pub use error::{CliError, Result};
