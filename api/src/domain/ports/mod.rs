//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Implementations (network clients, test doubles) provide them.

pub mod projects;

#[cfg(test)]
pub use projects::MockProjectsApi;
pub use projects::ProjectsApi;
