//! SQL mapping for `cursos` rows.

use crate::model::curso::{Curso, NovoCurso};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const CURSO_SELECT_SQL: &str =
    "SELECT id, nome, categoria, preco, plataforma_id, nivel, vertente, data_inicio, data_fim
     FROM cursos";

/// Marker type binding the generic resolvers to the `cursos` table.
pub struct CursoRepo;

impl Repository for CursoRepo {
    type Draft = NovoCurso;
    type Record = Curso;

    const LABEL: &'static str = "Curso";
    const TABLE: &'static str = "cursos";

    fn insert(conn: &Connection, draft: &NovoCurso) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO cursos
                 (nome, categoria, preco, plataforma_id, nivel, vertente, data_inicio, data_fim)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                draft.nome.as_str(),
                draft.categoria.as_deref(),
                draft.preco,
                draft.plataforma_id,
                draft.nivel.as_deref(),
                draft.vertente.as_deref(),
                draft.data_inicio,
                draft.data_fim,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Curso>> {
        let mut stmt = conn.prepare(&format!("{CURSO_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_curso_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Curso>> {
        let mut stmt = conn.prepare(&format!("{CURSO_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_curso_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Curso) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE cursos
             SET nome = ?1, categoria = ?2, preco = ?3, plataforma_id = ?4, nivel = ?5,
                 vertente = ?6, data_inicio = ?7, data_fim = ?8
             WHERE id = ?9;",
            params![
                record.nome.as_str(),
                record.categoria.as_deref(),
                record.preco,
                record.plataforma_id,
                record.nivel.as_deref(),
                record.vertente.as_deref(),
                record.data_inicio,
                record.data_fim,
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

fn parse_curso_row(row: &Row<'_>) -> RepoResult<Curso> {
    Ok(Curso {
        id: row.get("id")?,
        nome: row.get("nome")?,
        categoria: row.get("categoria")?,
        preco: row.get("preco")?,
        plataforma_id: row.get("plataforma_id")?,
        nivel: row.get("nivel")?,
        vertente: row.get("vertente")?,
        data_inicio: row.get("data_inicio")?,
        data_fim: row.get("data_fim")?,
    })
}
