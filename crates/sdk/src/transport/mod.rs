//! Transport layer for the Promq SDK.

pub mod http;

pub use http::HttpTransport;
