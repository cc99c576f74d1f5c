//! Projects API port
//!
//! The client contract for the remote projects service. A network client
//! and `ProjectsApiMock` both implement it; consumers take it as a type
//! parameter.

use async_trait::async_trait;

use crate::domain::entities::{
    Project, ProjectFields, ProjectId, ProjectLimits, ProjectsCursor, ProjectsPage,
};
use crate::error::ApiError;

/// Client for the projects service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Create a new project
    async fn create(&self, fields: &ProjectFields) -> Result<Project, ApiError>;

    /// Delete a project
    async fn delete(&self, project_id: &ProjectId) -> Result<(), ApiError>;

    /// List the user's projects
    async fn get(&self) -> Result<Vec<Project>, ApiError>;

    /// Get one page of the projects the user owns
    async fn get_owned_projects(&self, cursor: &ProjectsCursor) -> Result<ProjectsPage, ApiError>;

    /// Update a project's name and description
    async fn update(
        &self,
        project_id: &ProjectId,
        name: &str,
        description: &str,
    ) -> Result<(), ApiError>;

    /// Get usage and limits for one project
    async fn get_limits(&self, project_id: &ProjectId) -> Result<ProjectLimits, ApiError>;

    /// Get usage and limits summed over all of the user's projects
    async fn get_total_limits(&self) -> Result<ProjectLimits, ApiError>;
}
