//! HTTP request handlers.

pub mod cards;
pub mod http;

pub use cards::*;
pub use http::*;
