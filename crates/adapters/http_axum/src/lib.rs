//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for people and events
//!   (`/api/people`, `/api/person`, `/api/events`)
//! - Serve the **page shells** the frontend router mounts onto
//!   (`/`, `/example/{id}`, `/map/{id}`) and the bundle under `/static`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON through each record's allow-list
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits and services) and `roster-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;
