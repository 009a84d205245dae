//! Airline reservation desk.
//!
//! Keeps a flight catalog, per-flight seat allocation with waiting lists,
//! and a bounded history of cancellations, all in memory. The `cli` module
//! puts an interactive menu in front of it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod history;
pub mod inventory;
pub mod system;
