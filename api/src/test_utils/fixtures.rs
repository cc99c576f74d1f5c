//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid record that can be customized.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Project, ProjectId, ProjectLimits, ProjectsPage};

/// Create a test project with default values
pub fn test_project() -> Project {
    Project {
        id: ProjectId::new(),
        name: "test-project".to_string(),
        description: "A test project".to_string(),
        owner_id: "test-owner".to_string(),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        member_count: 1,
        is_selected: false,
    }
}

/// Create a test project with a specific name
pub fn test_project_named(name: &str) -> Project {
    Project {
        name: name.to_string(),
        description: format!("{} description", name),
        ..test_project()
    }
}

/// Create a test project with a fixed id and name
pub fn test_project_with_id(id: &str, name: &str) -> Project {
    Project {
        id: ProjectId::from(id),
        ..test_project_named(name)
    }
}

/// Create non-zero limits
pub fn test_limits() -> ProjectLimits {
    ProjectLimits {
        bandwidth_limit: 50_000,
        bandwidth_used: 1_200,
        storage_limit: 25_000,
        storage_used: 3_400,
        object_count: 12,
        object_limit: 10_000,
        segment_count: 40,
        segment_limit: 100_000,
    }
}

/// Create a single page holding all of `projects`
pub fn test_projects_page(projects: Vec<Project>) -> ProjectsPage {
    let total_count = projects.len() as u64;
    ProjectsPage {
        limit: projects.len() as u32,
        offset: 0,
        page_count: 1,
        current_page: 1,
        total_count,
        projects,
    }
}

/// Install a fmt subscriber for test output, filtered by `RUST_LOG`
///
/// Safe to call from every test; only the first call installs anything.
/// Outside this crate's own tests it needs the `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
