//! Resolver layer: transactional CRUD operations over the repository
//! contract.
//!
//! # Responsibility
//! - Bind each typed operation to exactly one store access pattern.
//! - Own the session/transaction discipline for every operation.
//!
//! # Invariants
//! - One connection-scoped session per operation; sessions are never shared
//!   across operations.
//! - Every resolver-local failure rolls the transaction back before it is
//!   surfaced; a partially committed mutation is never observable.

use crate::model::RecordId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod crud;

pub use crud::{atualizar, buscar_por_id, criar, listar, remover, Mensagem};

pub type ResolverResult<T> = Result<T, ResolverError>;

/// User-facing error taxonomy for resolver operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The targeted identifier does not exist.
    NotFound { entity: &'static str, id: RecordId },
    /// A required field was blank.
    Validation(String),
    /// Any store failure, wrapped with the underlying message text.
    ///
    /// The raw failure text is passed through to the caller on purpose; see
    /// DESIGN.md for the hardening trade-off.
    Store(String),
}

impl Display for ResolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: id={id}"),
            Self::Validation(message) => write!(f, "{message}"),
            Self::Store(message) => write!(f, "store failure: {message}"),
        }
    }
}

impl Error for ResolverError {}

impl From<RepoError> for ResolverError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity, id } => Self::NotFound { entity, id },
            RepoError::Validation(err) => Self::Validation(err.to_string()),
            RepoError::Db(err) => Self::Store(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for ResolverError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(value.to_string())
    }
}
