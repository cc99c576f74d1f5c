//! Projects store
//!
//! Client-side projects state on top of a `ProjectsApi`: the fetched list,
//! the selected project, limits and the owned projects page.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::{
    validate_description, validate_name, Project, ProjectFields, ProjectId, ProjectLimits,
    ProjectsCursor, ProjectsPage,
};
use crate::domain::ports::ProjectsApi;
use crate::error::AppError;

/// Local projects state backed by a projects service client
pub struct ProjectsStore<P>
where
    P: ProjectsApi,
{
    api: Arc<P>,
    config: Config,
    projects: Vec<Project>,
    selected: Option<ProjectId>,
    limits: ProjectLimits,
    total_limits: ProjectLimits,
    owned_page: ProjectsPage,
}

impl<P> ProjectsStore<P>
where
    P: ProjectsApi,
{
    pub fn new(api: Arc<P>, config: Config) -> Self {
        Self {
            api,
            config,
            projects: Vec::new(),
            selected: None,
            limits: ProjectLimits::default(),
            total_limits: ProjectLimits::default(),
            owned_page: ProjectsPage::default(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected.as_ref()?;
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn limits(&self) -> &ProjectLimits {
        &self.limits
    }

    pub fn total_limits(&self) -> &ProjectLimits {
        &self.total_limits
    }

    pub fn owned_page(&self) -> &ProjectsPage {
        &self.owned_page
    }

    /// Fetch the user's projects and replace the local list
    ///
    /// A selection whose project is no longer listed is dropped.
    pub async fn fetch_projects(&mut self) -> Result<Vec<Project>, AppError> {
        let projects = self.api.get().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch projects");
            e
        })?;
        tracing::debug!(count = projects.len(), "Fetched projects");

        self.projects = projects;

        let selection_gone = self
            .selected
            .as_ref()
            .is_some_and(|id| !self.projects.iter().any(|p| &p.id == id));
        if selection_gone {
            if let Some(id) = self.selected.take() {
                tracing::info!(project_id = %id, "Selected project no longer listed, clearing selection");
            }
        }
        if self.selected.is_none() && self.config.auto_select_first {
            self.selected = self.projects.first().map(|p| p.id.clone());
        }
        self.apply_selection();

        Ok(self.projects.clone())
    }

    /// Mark a fetched project as selected
    pub fn select_project(&mut self, id: &ProjectId) -> Result<(), AppError> {
        if !self.projects.iter().any(|p| &p.id == id) {
            return Err(AppError::ProjectNotFound(id.to_string()));
        }

        tracing::debug!(project_id = %id, "Selected project");
        self.selected = Some(id.clone());
        self.apply_selection();
        Ok(())
    }

    /// Create a project
    ///
    /// Invalid fields are rejected before the service is called.
    pub async fn create_project(&mut self, fields: &ProjectFields) -> Result<Project, AppError> {
        fields.validate().map_err(|msg| {
            tracing::warn!(name = %fields.name, "Rejected project fields: {}", msg);
            AppError::Validation(msg)
        })?;

        let project = self.api.create(fields).await.map_err(|e| {
            tracing::warn!(error = %e, name = %fields.name, "Failed to create project");
            e
        })?;
        tracing::info!(project_id = %project.id, name = %project.name, "Created project");

        self.projects.push(project.clone());
        Ok(project)
    }

    /// Delete a project and forget it locally
    pub async fn delete_project(&mut self, id: &ProjectId) -> Result<(), AppError> {
        self.api.delete(id).await.map_err(|e| {
            tracing::warn!(error = %e, project_id = %id, "Failed to delete project");
            e
        })?;
        tracing::info!(project_id = %id, "Deleted project");

        self.projects.retain(|p| &p.id != id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        Ok(())
    }

    /// Update a project's name and description
    ///
    /// The local copy, when present, reflects the new values. A later
    /// `fetch_projects` shows whatever the service reports.
    pub async fn update_project(
        &mut self,
        id: &ProjectId,
        name: &str,
        description: &str,
    ) -> Result<(), AppError> {
        validate_name(name)
            .and_then(|_| validate_description(description))
            .map_err(|msg| {
                tracing::warn!(project_id = %id, "Rejected project update: {}", msg);
                AppError::Validation(msg)
            })?;

        self.api.update(id, name, description).await.map_err(|e| {
            tracing::warn!(error = %e, project_id = %id, "Failed to update project");
            e
        })?;
        tracing::info!(project_id = %id, name, "Updated project");

        if let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) {
            project.name = name.to_string();
            project.description = description.to_string();
        }
        Ok(())
    }

    /// Fetch usage and limits for one project
    pub async fn fetch_limits(&mut self, id: &ProjectId) -> Result<ProjectLimits, AppError> {
        let limits = self.api.get_limits(id).await?;
        tracing::debug!(project_id = %id, "Fetched project limits");
        self.limits = limits;
        Ok(limits)
    }

    /// Fetch usage and limits summed over all projects
    pub async fn fetch_total_limits(&mut self) -> Result<ProjectLimits, AppError> {
        let limits = self.api.get_total_limits().await?;
        tracing::debug!("Fetched total limits");
        self.total_limits = limits;
        Ok(limits)
    }

    /// Fetch a page of owned projects, sized by the configured page limit
    ///
    /// `page` is 1-based.
    pub async fn fetch_owned_projects(&mut self, page: u32) -> Result<ProjectsPage, AppError> {
        if page == 0 {
            return Err(AppError::Validation("Page numbers start at 1".to_string()));
        }

        let cursor = ProjectsCursor {
            limit: self.config.page_limit,
            page,
        };
        let owned = self.api.get_owned_projects(&cursor).await?;
        tracing::debug!(
            page,
            limit = cursor.limit,
            count = owned.projects.len(),
            "Fetched owned projects"
        );

        self.owned_page = owned.clone();
        Ok(owned)
    }

    /// Drop all local state
    pub fn clear(&mut self) {
        self.projects.clear();
        self.selected = None;
        self.limits = ProjectLimits::default();
        self.total_limits = ProjectLimits::default();
        self.owned_page = ProjectsPage::default();
    }

    fn apply_selection(&mut self) {
        for project in &mut self.projects {
            project.is_selected = self.selected.as_ref() == Some(&project.id);
        }
    }
}
