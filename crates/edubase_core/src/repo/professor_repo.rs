//! SQL mapping for `professores` rows.

use crate::model::professor::{NovoProfessor, Professor};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const PROFESSOR_SELECT_SQL: &str =
    "SELECT id, nome, vertente, telefone, email, website, formacao FROM professores";

/// Marker type binding the generic resolvers to the `professores` table.
pub struct ProfessorRepo;

impl Repository for ProfessorRepo {
    type Draft = NovoProfessor;
    type Record = Professor;

    const LABEL: &'static str = "Professor";
    const TABLE: &'static str = "professores";

    fn insert(conn: &Connection, draft: &NovoProfessor) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO professores (nome, vertente, telefone, email, website, formacao)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.nome.as_str(),
                draft.vertente.as_deref(),
                draft.telefone.as_deref(),
                draft.email.as_deref(),
                draft.website.as_deref(),
                draft.formacao.as_deref(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Professor>> {
        let mut stmt = conn.prepare(&format!("{PROFESSOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_professor_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Professor>> {
        let mut stmt = conn.prepare(&format!("{PROFESSOR_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_professor_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Professor) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE professores
             SET nome = ?1, vertente = ?2, telefone = ?3, email = ?4, website = ?5, formacao = ?6
             WHERE id = ?7;",
            params![
                record.nome.as_str(),
                record.vertente.as_deref(),
                record.telefone.as_deref(),
                record.email.as_deref(),
                record.website.as_deref(),
                record.formacao.as_deref(),
                record.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: Self::LABEL,
                id: record.id,
            });
        }
        Ok(())
    }
}

fn parse_professor_row(row: &Row<'_>) -> RepoResult<Professor> {
    Ok(Professor {
        id: row.get("id")?,
        nome: row.get("nome")?,
        vertente: row.get("vertente")?,
        telefone: row.get("telefone")?,
        email: row.get("email")?,
        website: row.get("website")?,
        formacao: row.get("formacao")?,
    })
}
