//! Project domain entity
//!
//! Records exchanged with the projects service: projects, creation fields,
//! usage limits and paginated listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum project name length, in characters
pub const MAX_NAME_LENGTH: usize = 20;

/// Maximum project description length, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Page size used when no explicit limit is requested
pub const DEFAULT_PAGE_LIMIT: u32 = 7;

/// Unique identifier for a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub member_count: u32,
    /// Client-side selection flag, owned by the store
    #[serde(default)]
    pub is_selected: bool,
}

/// Data needed to create a new project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub owner_id: String,
}

impl ProjectFields {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            owner_id: String::new(),
        }
    }

    /// Check name and description against the service's length rules
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_description(&self.description)
    }
}

/// A project name must be non-blank and at most `MAX_NAME_LENGTH` characters
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Project name can't be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Project name must be at most {} characters",
            MAX_NAME_LENGTH
        ));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Project description must be at most {} characters",
            MAX_DESCRIPTION_LENGTH
        ));
    }
    Ok(())
}

/// Usage and limits for one project, or the sum over all of a user's projects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectLimits {
    pub bandwidth_limit: u64,
    pub bandwidth_used: u64,
    pub storage_limit: u64,
    pub storage_used: u64,
    pub object_count: u64,
    pub object_limit: u64,
    pub segment_count: u64,
    pub segment_limit: u64,
}

/// Pagination request for the owned projects listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsCursor {
    pub limit: u32,
    /// 1-based page number
    pub page: u32,
}

impl Default for ProjectsCursor {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            page: 1,
        }
    }
}

/// One page of the owned projects listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub limit: u32,
    pub offset: u64,
    pub page_count: u32,
    pub current_page: u32,
    pub total_count: u64,
}

impl ProjectsPage {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
