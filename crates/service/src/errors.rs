use std::fmt;

use thiserror::Error;

/// Entities a lookup can miss. Kept as a kind, not a message, so the HTTP
/// boundary can render localized text from templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Category,
    Menu,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Category => f.write_str("category"),
            Resource::Menu => f.write_str("menu"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(resource: Resource) -> Self {
        Self::NotFound(resource)
    }

    pub fn db(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errs: validator::ValidationErrors) -> Self {
        Self::Validation(validation_message(&errs))
    }
}

/// Collapse validator output to the first configured per-field message,
/// falling back to the generic malformed-payload text.
pub fn validation_message(errs: &validator::ValidationErrors) -> String {
    errs.field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "데이터 형식이 올바르지 않습니다.".to_string())
}
