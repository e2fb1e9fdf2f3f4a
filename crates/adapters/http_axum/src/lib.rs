//! # tamagotchi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for feedings and playtimes
//!   (`/api/Feedings`, `/api/Playtimes`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses and status codes
//!
//! ## Dependency rule
//! Depends on `tamagotchi-app` (for port traits and services) and
//! `tamagotchi-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
