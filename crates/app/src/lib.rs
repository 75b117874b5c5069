//! # roster-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository`: create and ordered, filtered listing of people
//!   - `EventRepository`: create and ordered listing of events
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService`: create from a payload, list all, list-or-fail lookup
//!   - `EventService`: create from a payload, list all
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `roster-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
