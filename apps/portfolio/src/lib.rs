pub mod api_client;
pub mod config;
pub mod content;
pub mod cv;
pub mod errors;
pub mod i18n;
pub mod session;
pub mod state;
pub mod storage;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use errors::{ClientError, ValidationError};
pub use state::AppContext;
