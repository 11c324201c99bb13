//! # squadup-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `GameRepository`: seed and list games with their ad counts
//!   - `AdRepository`: create ads, look them up, list them per game
//! - Define **driving/inbound ports** as use-case structs:
//!   - `GameService`: list the catalog, register seeded games
//!   - `AdService`: post an ad, list a game's ads, reveal a contact
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `squadup-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
