//! SQL mapping for `plataformas` rows.

use crate::model::plataforma::{NovaPlataforma, Plataforma};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const PLATAFORMA_SELECT_SQL: &str = "SELECT id, nome, email, website, tipo FROM plataformas";

/// Marker type binding the generic resolvers to the `plataformas` table.
pub struct PlataformaRepo;

impl Repository for PlataformaRepo {
    type Draft = NovaPlataforma;
    type Record = Plataforma;

    const LABEL: &'static str = "Plataforma";
    const TABLE: &'static str = "plataformas";

    fn insert(conn: &Connection, draft: &NovaPlataforma) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO plataformas (nome, email, website, tipo)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                draft.nome.as_str(),
                draft.email.as_deref(),
                draft.website.as_deref(),
                draft.tipo,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Plataforma>> {
        let mut stmt = conn.prepare(&format!("{PLATAFORMA_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_plataforma_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Plataforma>> {
        let mut stmt = conn.prepare(&format!("{PLATAFORMA_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_plataforma_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Plataforma) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE plataformas
             SET nome = ?1, email = ?2, website = ?3, tipo = ?4
             WHERE id = ?5;",
            params![
                record.nome.as_str(),
                record.email.as_deref(),
                record.website.as_deref(),
                record.tipo,
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

fn parse_plataforma_row(row: &Row<'_>) -> RepoResult<Plataforma> {
    Ok(Plataforma {
        id: row.get("id")?,
        nome: row.get("nome")?,
        email: row.get("email")?,
        website: row.get("website")?,
        tipo: row.get("tipo")?,
    })
}
