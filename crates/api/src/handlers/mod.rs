//! HTTP handlers, grouped by resource.
//!
//! Handlers orchestrate multi-step mutations: they validate against the
//! core rules, open a transaction where two entities must move together
//! (approve+assign, delete+release), and map store outcomes onto the
//! error taxonomy.

pub mod complaints;
pub mod menu;
pub mod payments;
pub mod registration;
pub mod residents;
pub mod rooms;
