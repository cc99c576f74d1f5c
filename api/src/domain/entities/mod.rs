//! Domain entities
//!
//! Records exchanged with the projects service.

pub mod project;

pub use project::{
    validate_description, validate_name, Project, ProjectFields, ProjectId, ProjectLimits,
    ProjectsCursor, ProjectsPage, DEFAULT_PAGE_LIMIT, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};
