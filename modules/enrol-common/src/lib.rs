pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod types;

pub use config::Config;
pub use error::{EnrolError, FieldError};
pub use format::*;
pub use schema::*;
pub use types::*;
