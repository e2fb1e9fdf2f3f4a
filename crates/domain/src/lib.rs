//! # tamagotchi-domain
//!
//! Pure domain model for the tamagotchi pet-care tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Feedings** (a pet was fed some amount of some food)
//! - Define **Playtimes** (a pet played for some duration)
//! - Define the **drafts** clients send to create or replace a record
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod feeding;
pub mod playtime;
