//! HTTP adapters

pub mod echo;

pub use echo::{router, EchoHttpServer, ECHO_ROUTE};
