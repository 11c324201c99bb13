//! # squadup-domain
//!
//! Pure domain model for the squadup matchmaking-ad service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Games** (catalog entries players advertise for)
//! - Define **Ads** ("looking for group" posts) and their public projections
//! - Own the storage encodings of availability: minutes-since-midnight
//!   time of day and the comma-delimited weekday list
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod ad;
pub mod game;
pub mod week_days;
