pub mod config;
pub mod cs;
pub mod error;

pub use config::Config;
pub use cs::compression;
pub use error::{Error, Result};
