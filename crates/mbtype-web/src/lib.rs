//! MBType web front-end
//!
//! Loads the four axis models at startup and serves the prediction form
//! and API over axum.

pub mod app;
pub mod assets;
pub mod cli;
pub mod error;
pub mod routes;
pub mod state;

pub use app::{build_app, run_server};
pub use cli::Cli;
pub use error::ApiError;
pub use state::AppState;
