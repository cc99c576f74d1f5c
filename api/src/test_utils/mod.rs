//! Test utilities
//!
//! The projects API test double and fixtures for unit testing code that
//! depends on `ProjectsApi`.
//!
//! `ProjectsApiMock` is hand-written rather than generated: it keeps the
//! records the test loads and serves them back, which is all most tests of
//! projects state need. Error paths it never takes (a failing `get`, a
//! successful `create`) are covered with mockall's `MockProjectsApi` in
//! this crate's own tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
