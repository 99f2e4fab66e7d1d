//! atlas-server
//! ============
//!
//! Read-only REST API over the `atlas-core` services. Every endpoint is a
//! `GET`, every response uses the same JSON envelope:
//!
//! ```text
//! {"status":"success","data":...,"meta":{...}|null,"error":null}
//! {"status":"error","data":null,"meta":null,"error":{"code","kind","message","details"}}
//! ```

pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use server::{app, start_server, AppState};
