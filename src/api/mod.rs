//! HTTP surface of the profile proxy

pub mod routes;
pub mod server;

pub use routes::AppState;
pub use server::{ApiServer, app_state, router};
