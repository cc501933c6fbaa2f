//! Typed error handling for the blog API
//!
//! Every failure a resolver can report is a [`BlogError`]. Mutations raise
//! the domain variants when a write-time precondition does not hold; read
//! paths only raise [`BlogError::DanglingReference`] (a stored id that
//! points nowhere), [`BlogError::NonFiniteResult`] from the arithmetic
//! fields and [`BlogError::Storage`].
//!
//! # Example
//!
//! ```rust,ignore
//! match store.create_user(new_user).await {
//!     Ok(user) => println!("created {}", user.id),
//!     Err(BlogError::DuplicateEmail { email }) => println!("{} is taken", email),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use thiserror::Error;

/// Result alias used by the store and resolvers
pub type BlogResult<T> = Result<T, BlogError>;

/// The main error type for the blog API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlogError {
    /// A user with this e-mail already exists
    #[error("Email taken")]
    DuplicateEmail { email: String },

    /// The referenced author does not exist
    #[error("User Not Found")]
    UserNotFound { id: String },

    /// The referenced post does not exist or is not published
    #[error("post doesn't exist or the post not published yet")]
    PostUnavailable { id: String },

    /// A stored reference points at a record that is not in the store
    #[error("{entity} with id '{id}' referenced but not found")]
    DanglingReference { entity: &'static str, id: String },

    /// Arithmetic result that a GraphQL `Float` cannot carry (inf or NaN)
    #[error("Float cannot represent non numeric value: {value}")]
    NonFiniteResult { field: &'static str, value: f64 },

    /// Storage backend failure (lock poisoning and the like)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BlogError {
    /// Get the HTTP status code matching this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::DuplicateEmail { .. } => StatusCode::CONFLICT,
            BlogError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            BlogError::PostUnavailable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            BlogError::DanglingReference { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            BlogError::NonFiniteResult { .. } => StatusCode::BAD_REQUEST,
            BlogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            BlogError::UserNotFound { .. } => "USER_NOT_FOUND",
            BlogError::PostUnavailable { .. } => "POST_UNAVAILABLE",
            BlogError::DanglingReference { .. } => "DANGLING_REFERENCE",
            BlogError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            BlogError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Id carried by the error, if any
    fn subject_id(&self) -> Option<&str> {
        match self {
            BlogError::DuplicateEmail { .. }
            | BlogError::NonFiniteResult { .. }
            | BlogError::Storage(_) => None,
            BlogError::UserNotFound { id }
            | BlogError::PostUnavailable { id }
            | BlogError::DanglingReference { id, .. } => Some(id),
        }
    }
}

/// Reject sums that overflowed to infinity or turned into NaN
pub fn finite(field: &'static str, value: f64) -> BlogResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BlogError::NonFiniteResult { field, value })
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.error_code());
            ext.set("status", i32::from(self.status_code().as_u16()));
            if let Some(id) = self.subject_id() {
                ext.set("id", id);
            }
            if let BlogError::NonFiniteResult { field, .. } = self {
                ext.set("field", *field);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_contract() {
        let err = BlogError::DuplicateEmail {
            email: "helga@mail.com".to_string(),
        };
        assert_eq!(err.to_string(), "Email taken");

        let err = BlogError::UserNotFound {
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "User Not Found");

        let err = BlogError::PostUnavailable {
            id: "3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "post doesn't exist or the post not published yet"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BlogError::DuplicateEmail {
                email: String::new()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            BlogError::UserNotFound { id: String::new() }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BlogError::Storage("poisoned".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_extend_sets_code_extension() {
        let err = BlogError::DanglingReference {
            entity: "user",
            id: String::new(),
        }
        .extend();

        let ext = err.extensions.expect("extensions should be set");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("DANGLING_REFERENCE"))
        );
        assert_eq!(ext.get("id"), Some(&async_graphql::Value::from("")));
    }

    #[test]
    fn test_finite_rejects_overflow_and_nan() {
        assert_eq!(finite("add", 3.5), Ok(3.5));
        assert!(matches!(
            finite("add", f64::INFINITY),
            Err(BlogError::NonFiniteResult { field: "add", .. })
        ));
        assert!(finite("addArr", f64::NAN).is_err());

        let err = BlogError::NonFiniteResult {
            field: "add",
            value: f64::NEG_INFINITY,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "NON_FINITE_RESULT");
    }

    #[test]
    fn test_duplicate_email_has_no_id_extension() {
        let err = BlogError::DuplicateEmail {
            email: "x@y.z".to_string(),
        }
        .extend();

        let ext = err.extensions.expect("extensions should be set");
        assert!(ext.get("id").is_none());
        assert_eq!(ext.get("status"), Some(&async_graphql::Value::from(409)));
    }
}
