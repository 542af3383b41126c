//! Registrar RESTful API
//!
//! Token-authenticated endpoints for accounts, semesters, courses and
//! enrollments. Every add and drop passes through the eligibility rules in
//! `registrar-domain`.

pub mod auth;
pub mod bootstrap;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::build_router;
pub use server::ApiServer;
pub use state::AppState;
