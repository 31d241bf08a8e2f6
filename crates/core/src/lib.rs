//! Domain rules for the HostelEase lifecycle engine.
//!
//! Pure logic only: status enumerations and their transition tables,
//! the room availability invariant, and registration validation. No I/O
//! happens here -- the `hostelease-db` and `hostelease-api` crates build
//! on these rules.

pub mod admission;
pub mod complaint;
pub mod error;
pub mod menu;
pub mod occupancy;
pub mod payment;
pub mod roles;
pub mod types;
pub mod validation;
