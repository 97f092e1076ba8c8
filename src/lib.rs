//! devconnector: REST API for user registration and login.
//!
//! Users sign up with name, email and password, get a Gravatar avatar and
//! receive a signed JWT they can present on later requests.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use state::AppState;
