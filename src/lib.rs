//! Client core for the meeting and visitor tracking console (TZTS).
//!
//! The backend owns persistence, authorization and aggregation; this crate
//! holds everything the console needs on its side of the wire: entity
//! models, the status lifecycle, form/dialog controllers with client-side
//! validation, a REST client, and an explicit session context.

pub mod api;
pub mod config;
pub mod duration;
pub mod errors;
pub mod forms;
pub mod models;
pub mod pages;
pub mod reports;
pub mod session;
pub mod status;
pub mod timefmt;
