//! Mock implementations of port traits
//!
//! `ProjectsApiMock` answers from records the test loads beforehand. It
//! never changes them: `update` succeeds without touching anything, and
//! `create`/`delete` always fail with `ApiError::NotImplemented`.

use async_trait::async_trait;

use crate::domain::entities::{
    Project, ProjectFields, ProjectId, ProjectLimits, ProjectsCursor, ProjectsPage,
};
use crate::domain::ports::ProjectsApi;
use crate::error::ApiError;

// ============================================================================
// Projects API Mock
// ============================================================================

/// Canned-data stand-in for a projects service client
///
/// Fields that were never set read back as their empty default.
#[derive(Debug, Default, Clone)]
pub struct ProjectsApiMock {
    projects: Vec<Project>,
    limits: ProjectLimits,
    projects_page: ProjectsPage,
}

impl ProjectsApiMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list returned by `get`
    pub fn set_mock_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    /// Replace the record returned by both `get_limits` and `get_total_limits`
    pub fn set_mock_limits(&mut self, limits: ProjectLimits) {
        self.limits = limits;
    }

    /// Replace the page returned by `get_owned_projects`
    pub fn set_mock_projects_page(&mut self, page: ProjectsPage) {
        self.projects_page = page;
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.set_mock_projects(projects);
        self
    }

    pub fn with_limits(mut self, limits: ProjectLimits) -> Self {
        self.set_mock_limits(limits);
        self
    }

    pub fn with_projects_page(mut self, page: ProjectsPage) -> Self {
        self.set_mock_projects_page(page);
        self
    }
}

#[async_trait]
impl ProjectsApi for ProjectsApiMock {
    async fn create(&self, _fields: &ProjectFields) -> Result<Project, ApiError> {
        Err(ApiError::NotImplemented)
    }

    async fn delete(&self, _project_id: &ProjectId) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented)
    }

    async fn get(&self) -> Result<Vec<Project>, ApiError> {
        Ok(self.projects.clone())
    }

    async fn get_owned_projects(&self, _cursor: &ProjectsCursor) -> Result<ProjectsPage, ApiError> {
        Ok(self.projects_page.clone())
    }

    async fn update(
        &self,
        _project_id: &ProjectId,
        _name: &str,
        _description: &str,
    ) -> Result<(), ApiError> {
        Ok(())
    }

    async fn get_limits(&self, _project_id: &ProjectId) -> Result<ProjectLimits, ApiError> {
        Ok(self.limits)
    }

    async fn get_total_limits(&self) -> Result<ProjectLimits, ApiError> {
        Ok(self.limits)
    }
}
