//! # tamagotchi-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FeedingRepository` — CRUD for feedings
//!   - `PlaytimeRepository` — CRUD for playtimes
//! - Define **driving/inbound ports** as use-case structs:
//!   - `FeedingService` — list, get, create, update, delete
//!   - `PlaytimeService` — list, get, create, update, delete
//! - Turn a stale write into either `NotFound` or `Conflict`
//!
//! ## Dependency rule
//! Depends on `tamagotchi-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
