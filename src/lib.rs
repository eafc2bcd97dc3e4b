//! Recipe suggestions from a list of ingredients.
//!
//! A remote generator is tried first; when it is unavailable the reference
//! catalog is matched against the ingredients and narrowed by preferences.
//! Display filters are then applied to whatever recipe set the client holds.
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
