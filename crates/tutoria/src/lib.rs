//! Domain library for the Tutoria tutoring marketplace.
//!
//! The marketplace core is split into three modules: [`scheduling`] answers
//! which tutors can take an entire booking window, [`location`] guards stored
//! user coordinates behind a great-circle distance gate, and [`profiles`]
//! manages the tutor-facing marketplace profiles those two engines serve.
//! Persistence is abstracted behind per-module repository traits so the
//! matching and gating logic stays pure and snapshot-driven.

pub mod config;
pub mod error;
pub mod geo;
pub mod location;
pub mod profiles;
pub mod scheduling;
pub mod telemetry;
pub mod users;
