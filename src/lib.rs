pub mod checkin;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod mock;
pub mod models;
pub mod profile;
pub mod role_view;
pub mod routes;
pub mod session;
pub mod ui;

pub use error::{AppError, Result};
