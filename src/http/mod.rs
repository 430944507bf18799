//! Web interface: record API plus the embedded visualization page

pub mod handler;
pub mod server;

pub use handler::{AppState, SharedState};
pub use server::{router, HttpServer};
