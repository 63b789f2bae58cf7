// src/api/mod.rs

pub mod envelope;
pub mod error;
pub mod http;

pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
