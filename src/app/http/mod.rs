//! HTTP surface for the climate API
//!
//! Maps the fixed query endpoints onto the climate query service: an axum
//! router, one handler per route, and the error-to-response mapping that
//! turns a no-observations result into a 404 with an `{"error"}` body.

pub mod handlers;
pub mod response;
pub mod router;

pub use router::router;
