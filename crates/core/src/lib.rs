//! # CareAlert Core
//!
//! Domain types shared by the CareAlert scheduling engine and its
//! collaborators: medication schedules, reminder occurrences, live alerts,
//! history entries, vital-sign readings, and emergency contacts.
//!
//! Everything in this crate is plain data plus validation: no I/O, and no
//! clocks read behind the caller's back. The current time always enters
//! through the [`clock::Clock`] trait so that scheduling decisions stay
//! deterministic under test.

/// Injectable time source
pub mod clock;
/// Domain error types
pub mod errors;
/// Data models and validation
pub mod models;
