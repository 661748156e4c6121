//! Core data-access layer for the edubase opportunities catalog.
//! This crate is the single source of truth for the typed CRUD contract.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod service;

pub use config::{ConfigError, DbConfig};
pub use db::{open_db, open_db_in_memory, DbError};
pub use logging::{default_log_level, init_logging};
pub use model::{
    Bolsa, BolsaPatch, Curso, CursoPatch, Empresa, EmpresaPatch, Endereco, EnderecoPatch, Estagio,
    EstagioPatch, NovaBolsa, NovaEmpresa, NovaPlataforma, NovoCurso, NovoEndereco, NovoEstagio,
    NovoProfessor, Patch, Plataforma, PlataformaPatch, Professor, ProfessorPatch, RecordId,
    ValidationError,
};
pub use repo::{
    BolsaRepo, CursoRepo, EmpresaRepo, EnderecoRepo, EstagioRepo, PlataformaRepo, ProfessorRepo,
    RepoError, RepoResult, Repository,
};
pub use schema::{execute, Envelope, GetId, Operation, OperationError};
pub use service::{
    atualizar, buscar_por_id, criar, listar, remover, Mensagem, ResolverError, ResolverResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
