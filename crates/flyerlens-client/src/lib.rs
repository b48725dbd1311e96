//! Client for the flyer-analysis backend: uploads one flyer, decodes the extracted event.

pub mod analyze;
pub mod config;
mod error;

pub use analyze::AnalyzeClient;
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL};
pub use error::{AnalyzeError, AnalyzeErrorKind, ClientBuildError};
