//! Catalog domain records and typed operation inputs.
//!
//! # Responsibility
//! - Define the canonical record, draft (create) and patch (update) shapes
//!   for every catalog entity.
//! - Keep the partial-update merge rule in one place.
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer id, immutable
//!   after creation.
//! - A patch field set to `None` always means "leave unchanged"; the protocol
//!   has no way to clear a stored value back to null.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod bolsa;
pub mod curso;
pub mod empresa;
pub mod endereco;
pub mod estagio;
pub mod plataforma;
pub mod professor;

pub use bolsa::{Bolsa, BolsaPatch, NovaBolsa};
pub use curso::{Curso, CursoPatch, NovoCurso};
pub use empresa::{Empresa, EmpresaPatch, NovaEmpresa};
pub use endereco::{Endereco, EnderecoPatch, NovoEndereco};
pub use estagio::{Estagio, EstagioPatch, NovoEstagio};
pub use plataforma::{NovaPlataforma, Plataforma, PlataformaPatch};
pub use professor::{NovoProfessor, Professor, ProfessorPatch};

/// Store-assigned identifier shared by every catalog entity.
pub type RecordId = i64;

/// Partial-update input contract shared by every entity patch type.
pub trait Patch {
    /// Record shape this patch applies to.
    type Record;

    /// Target record id. The id itself is never mutated by a patch.
    fn id(&self) -> RecordId;

    /// Overlays the non-`None` patch fields onto `current`.
    ///
    /// `None` always means "do not touch"; there is no sentinel for
    /// "set to null".
    fn apply(&self, current: Self::Record) -> Self::Record;
}

/// Required-field violation reported before any SQL runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: &'static str,
    pub field: &'static str,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{} must not be blank", self.entity, self.field)
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError { entity, field });
    }
    Ok(())
}
