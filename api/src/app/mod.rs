//! Application layer
//!
//! Services that coordinate local state with the projects service port.

pub mod projects_store;

pub use projects_store::ProjectsStore;
