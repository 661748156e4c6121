//! SQL mapping for `empresas` rows.

use crate::model::empresa::{Empresa, NovaEmpresa};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const EMPRESA_SELECT_SQL: &str =
    "SELECT id, nome, vertente, cnpj, endereco_id, telefone, email, website, status
     FROM empresas";

/// Marker type binding the generic resolvers to the `empresas` table.
pub struct EmpresaRepo;

impl Repository for EmpresaRepo {
    type Draft = NovaEmpresa;
    type Record = Empresa;

    const LABEL: &'static str = "Empresa";
    const TABLE: &'static str = "empresas";

    fn insert(conn: &Connection, draft: &NovaEmpresa) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO empresas
                 (nome, vertente, cnpj, endereco_id, telefone, email, website, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                draft.nome.as_str(),
                draft.vertente.as_deref(),
                draft.cnpj.as_deref(),
                draft.endereco_id,
                draft.telefone.as_deref(),
                draft.email.as_deref(),
                draft.website.as_deref(),
                draft.status,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Empresa>> {
        let mut stmt = conn.prepare(&format!("{EMPRESA_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_empresa_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Empresa>> {
        let mut stmt = conn.prepare(&format!("{EMPRESA_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_empresa_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Empresa) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE empresas
             SET nome = ?1, vertente = ?2, cnpj = ?3, endereco_id = ?4, telefone = ?5,
                 email = ?6, website = ?7, status = ?8
             WHERE id = ?9;",
            params![
                record.nome.as_str(),
                record.vertente.as_deref(),
                record.cnpj.as_deref(),
                record.endereco_id,
                record.telefone.as_deref(),
                record.email.as_deref(),
                record.website.as_deref(),
                record.status,
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

fn parse_empresa_row(row: &Row<'_>) -> RepoResult<Empresa> {
    Ok(Empresa {
        id: row.get("id")?,
        nome: row.get("nome")?,
        vertente: row.get("vertente")?,
        cnpj: row.get("cnpj")?,
        endereco_id: row.get("endereco_id")?,
        telefone: row.get("telefone")?,
        email: row.get("email")?,
        website: row.get("website")?,
        status: row.get("status")?,
    })
}
