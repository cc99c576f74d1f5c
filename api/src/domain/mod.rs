//! Domain layer
//!
//! Contains the projects records and the client contract, with no
//! transport attached.
//! - `entities`: records representing projects, limits and pages
//! - `ports`: trait definitions for the projects service client

pub mod entities;
pub mod ports;
