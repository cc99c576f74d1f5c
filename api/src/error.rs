//! Error types for the projects API
//!
//! This module defines error types for each layer:
//! - `ApiError`: errors surfaced by a `ProjectsApi` implementation
//! - `AppError`: store layer errors (wraps API errors, adds input validation)

use thiserror::Error;

/// Errors returned by a `ProjectsApi` implementation
#[derive(Debug, Error)]
pub enum ApiError {
    /// The implementation does not model this operation
    #[error("not implemented")]
    NotImplemented,
}

/// Application layer errors - used by `ProjectsStore`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_message() {
        assert_eq!(ApiError::NotImplemented.to_string(), "not implemented");
    }

    #[test]
    fn app_error_is_transparent_over_api_error() {
        let err: AppError = ApiError::NotImplemented.into();
        assert_eq!(err.to_string(), "not implemented");
        assert!(matches!(err, AppError::Api(ApiError::NotImplemented)));
    }

    #[test]
    fn app_error_display() {
        assert_eq!(
            AppError::Validation("name is empty".to_string()).to_string(),
            "Validation error: name is empty"
        );
        assert_eq!(
            AppError::ProjectNotFound("p1".to_string()).to_string(),
            "Project not found: p1"
        );
    }
}
