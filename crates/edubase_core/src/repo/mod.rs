//! Repository layer: per-entity SQL behind one capability contract.
//!
//! # Responsibility
//! - Define the capability contract the generic resolvers are built on.
//! - Keep SQL and row-mapping details out of the service layer.
//!
//! # Invariants
//! - Write paths validate required fields before any SQL mutation.
//! - `delete` reports `NotFound` instead of silently affecting zero rows.
//! - Reference ids are written as-is; existence of the referenced row is
//!   never checked.

use crate::db::DbError;
use crate::model::{RecordId, ValidationError};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod bolsa_repo;
pub mod curso_repo;
pub mod empresa_repo;
pub mod endereco_repo;
pub mod estagio_repo;
pub mod plataforma_repo;
pub mod professor_repo;

pub use bolsa_repo::BolsaRepo;
pub use curso_repo::CursoRepo;
pub use empresa_repo::EmpresaRepo;
pub use endereco_repo::EnderecoRepo;
pub use estagio_repo::EstagioRepo;
pub use plataforma_repo::PlataformaRepo;
pub use professor_repo::ProfessorRepo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound { entity: &'static str, id: RecordId },
    Validation(ValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: id={id}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Capability contract implemented once per entity.
///
/// The resolver layer is written against this trait only, so the whole CRUD
/// surface (including delete) exists as a single generic implementation
/// instantiated per entity marker type.
pub trait Repository {
    /// Create input accepted by `insert`.
    type Draft;
    /// Persisted record shape.
    type Record;

    /// User-facing entity label used in error messages.
    const LABEL: &'static str;
    /// Backing table name.
    const TABLE: &'static str;

    /// Inserts one row and returns the store-assigned id.
    fn insert(conn: &Connection, draft: &Self::Draft) -> RepoResult<RecordId>;

    /// Fetches one row by id.
    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Self::Record>>;

    /// Lists every row in natural scan order.
    fn list(conn: &Connection) -> RepoResult<Vec<Self::Record>>;

    /// Overwrites every non-id column of the row identified by `record.id`.
    fn update(conn: &Connection, record: &Self::Record) -> RepoResult<()>;

    /// Deletes one row by id. Shared by every entity; a zero-row result maps
    /// to `NotFound`.
    fn delete(conn: &Connection, id: RecordId) -> RepoResult<()> {
        let changed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", Self::TABLE),
            [id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: Self::LABEL,
                id,
            });
        }
        Ok(())
    }
}
