//! Utility functions shared by the command-line surface and the library.
//!
//! - **URL validation**: scheme checks and optional rejection of private hosts

mod url_validator;

pub use url_validator::{validate_url, UrlValidationError};
