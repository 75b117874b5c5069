//! # roster-domain
//!
//! Pure domain model for the roster backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **People** and **Events**, both in stored and not-yet-stored form
//! - Parse untyped creation payloads against each record's declared fields
//! - Define equality **filters** over people
//! - Project records through a fixed, ordered **allow-list** for transport
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod attributes;
pub mod error;
pub mod id;
pub mod projection;
pub mod time;

pub mod event;
pub mod person;
