//! SQL mapping for `estagios` rows.

use crate::model::estagio::{Estagio, NovoEstagio};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const ESTAGIO_SELECT_SQL: &str = "SELECT
    id,
    nome,
    vertente,
    salario,
    empresa_id,
    remunerado,
    horas_semanais,
    descricao,
    data_inicio,
    data_fim
FROM estagios";

/// Marker type binding the generic resolvers to the `estagios` table.
pub struct EstagioRepo;

impl Repository for EstagioRepo {
    type Draft = NovoEstagio;
    type Record = Estagio;

    const LABEL: &'static str = "Estagio";
    const TABLE: &'static str = "estagios";

    fn insert(conn: &Connection, draft: &NovoEstagio) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO estagios
                 (nome, vertente, salario, empresa_id, remunerado, horas_semanais,
                  descricao, data_inicio, data_fim)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                draft.nome.as_str(),
                draft.vertente.as_deref(),
                draft.salario,
                draft.empresa_id,
                draft.remunerado,
                draft.horas_semanais,
                draft.descricao.as_deref(),
                draft.data_inicio,
                draft.data_fim,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Estagio>> {
        let mut stmt = conn.prepare(&format!("{ESTAGIO_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_estagio_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Estagio>> {
        let mut stmt = conn.prepare(&format!("{ESTAGIO_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_estagio_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Estagio) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE estagios
             SET nome = ?1, vertente = ?2, salario = ?3, empresa_id = ?4, remunerado = ?5,
                 horas_semanais = ?6, descricao = ?7, data_inicio = ?8, data_fim = ?9
             WHERE id = ?10;",
            params![
                record.nome.as_str(),
                record.vertente.as_deref(),
                record.salario,
                record.empresa_id,
                record.remunerado,
                record.horas_semanais,
                record.descricao.as_deref(),
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

fn parse_estagio_row(row: &Row<'_>) -> RepoResult<Estagio> {
    Ok(Estagio {
        id: row.get("id")?,
        nome: row.get("nome")?,
        vertente: row.get("vertente")?,
        salario: row.get("salario")?,
        empresa_id: row.get("empresa_id")?,
        remunerado: row.get("remunerado")?,
        horas_semanais: row.get("horas_semanais")?,
        descricao: row.get("descricao")?,
        data_inicio: row.get("data_inicio")?,
        data_fim: row.get("data_fim")?,
    })
}
