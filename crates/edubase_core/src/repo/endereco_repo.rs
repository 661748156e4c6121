//! SQL mapping for `enderecos` rows.

use crate::model::endereco::{Endereco, NovoEndereco};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const ENDERECO_SELECT_SQL: &str =
    "SELECT id, rua, numero, bairro, cidade, estado, cep FROM enderecos";

/// Marker type binding the generic resolvers to the `enderecos` table.
pub struct EnderecoRepo;

impl Repository for EnderecoRepo {
    type Draft = NovoEndereco;
    type Record = Endereco;

    const LABEL: &'static str = "Endereco";
    const TABLE: &'static str = "enderecos";

    fn insert(conn: &Connection, draft: &NovoEndereco) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO enderecos (rua, numero, bairro, cidade, estado, cep)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                draft.rua.as_str(),
                draft.numero,
                draft.bairro.as_deref(),
                draft.cidade.as_deref(),
                draft.estado.as_deref(),
                draft.cep.as_deref(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Endereco>> {
        let mut stmt = conn.prepare(&format!("{ENDERECO_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_endereco_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Endereco>> {
        let mut stmt = conn.prepare(&format!("{ENDERECO_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_endereco_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Endereco) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE enderecos
             SET rua = ?1, numero = ?2, bairro = ?3, cidade = ?4, estado = ?5, cep = ?6
             WHERE id = ?7;",
            params![
                record.rua.as_str(),
                record.numero,
                record.bairro.as_deref(),
                record.cidade.as_deref(),
                record.estado.as_deref(),
                record.cep.as_deref(),
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

fn parse_endereco_row(row: &Row<'_>) -> RepoResult<Endereco> {
    Ok(Endereco {
        id: row.get("id")?,
        rua: row.get("rua")?,
        numero: row.get("numero")?,
        bairro: row.get("bairro")?,
        cidade: row.get("cidade")?,
        estado: row.get("estado")?,
        cep: row.get("cep")?,
    })
}
