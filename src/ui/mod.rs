//! GUI panels and application state.

pub mod analytics_panel;
pub mod app;
pub mod attendance_panel;
pub mod components;
pub mod face_panel;
pub mod home;
pub mod login;
pub mod placeholder_panel;
pub mod profile_panel;
pub mod scan_panel;

pub use app::App;
