use std::fmt;
use thiserror::Error;

/// The kinds of stored entity a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Client,
    RelationshipManager,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client              => write!(f, "Client"),
            Self::RelationshipManager => write!(f, "Relationship Manager"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{entity} not found")]
    NotFound { entity: EntityKind, id: String },

    #[error("Stored {column} for {entity} '{id}' cannot be decoded: {source}")]
    DataIntegrity {
        entity: EntityKind,
        id: String,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_name_the_entity() {
        let err = ApiError::not_found(EntityKind::Client, "client-999");
        assert_eq!(err.to_string(), "Client not found");
        assert!(err.is_not_found());

        let err = ApiError::not_found(EntityKind::RelationshipManager, "rm-999");
        assert_eq!(err.to_string(), "Relationship Manager not found");
    }

    #[test]
    fn data_integrity_is_not_a_miss() {
        let source = serde_json::from_str::<Vec<String>>("{oops").unwrap_err();
        let err = ApiError::DataIntegrity {
            entity: EntityKind::Client,
            id: "client-001".into(),
            column: "risk_flags",
            source,
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("risk_flags"));
    }
}
