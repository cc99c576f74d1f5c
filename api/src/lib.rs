//! Projects API client contract
//!
//! Uses hexagonal (ports & adapters) layout:
//! - `domain`: project records and the `ProjectsApi` port
//! - `app`: `ProjectsStore`, local projects state driven through the port
//! - `test_utils`: `ProjectsApiMock`, a canned-data double for the port, and fixtures

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod test_utils;

pub use app::ProjectsStore;
pub use config::Config;
pub use domain::entities::{
    Project, ProjectFields, ProjectId, ProjectLimits, ProjectsCursor, ProjectsPage,
};
pub use domain::ports::ProjectsApi;
pub use error::{ApiError, AppError};
pub use test_utils::ProjectsApiMock;
