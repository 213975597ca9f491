//! # Kaşif Core
//!
//! Record shapes, seed data and the point-economy rules shared by the store and the API.
//! Everything in this crate is synchronous and free of I/O.

pub mod errors;
pub mod ids;
pub mod models;
pub mod rules;
pub mod seed;
