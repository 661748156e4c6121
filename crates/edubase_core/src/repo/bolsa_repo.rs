//! SQL mapping for `bolsas` rows.

use crate::model::bolsa::{Bolsa, NovaBolsa};
use crate::model::RecordId;
use crate::repo::{RepoError, RepoResult, Repository};
use rusqlite::{params, Connection, Row};

const BOLSA_SELECT_SQL: &str = "SELECT
    id,
    nome,
    vertente,
    salario,
    remunerado,
    horas_semanais,
    quantidade_vagas,
    descricao,
    data_inicio,
    data_fim,
    professor_id
FROM bolsas";

/// Marker type binding the generic resolvers to the `bolsas` table.
pub struct BolsaRepo;

impl Repository for BolsaRepo {
    type Draft = NovaBolsa;
    type Record = Bolsa;

    const LABEL: &'static str = "Bolsa";
    const TABLE: &'static str = "bolsas";

    fn insert(conn: &Connection, draft: &NovaBolsa) -> RepoResult<RecordId> {
        draft.validate()?;

        conn.execute(
            "INSERT INTO bolsas
                 (nome, vertente, salario, remunerado, horas_semanais, quantidade_vagas,
                  descricao, data_inicio, data_fim, professor_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                draft.nome.as_str(),
                draft.vertente.as_deref(),
                draft.salario,
                draft.remunerado,
                draft.horas_semanais,
                draft.quantidade_vagas,
                draft.descricao.as_deref(),
                draft.data_inicio,
                draft.data_fim,
                draft.professor_id,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn get(conn: &Connection, id: RecordId) -> RepoResult<Option<Bolsa>> {
        let mut stmt = conn.prepare(&format!("{BOLSA_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_bolsa_row(row)?));
        }
        Ok(None)
    }

    fn list(conn: &Connection) -> RepoResult<Vec<Bolsa>> {
        let mut stmt = conn.prepare(&format!("{BOLSA_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut registros = Vec::new();
        while let Some(row) = rows.next()? {
            registros.push(parse_bolsa_row(row)?);
        }
        Ok(registros)
    }

    fn update(conn: &Connection, record: &Bolsa) -> RepoResult<()> {
        record.validate()?;

        let changed = conn.execute(
            "UPDATE bolsas
             SET nome = ?1, vertente = ?2, salario = ?3, remunerado = ?4, horas_semanais = ?5,
                 quantidade_vagas = ?6, descricao = ?7, data_inicio = ?8, data_fim = ?9,
                 professor_id = ?10
             WHERE id = ?11;",
            params![
                record.nome.as_str(),
                record.vertente.as_deref(),
                record.salario,
                record.remunerado,
                record.horas_semanais,
                record.quantidade_vagas,
                record.descricao.as_deref(),
                record.data_inicio,
                record.data_fim,
                record.professor_id,
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

fn parse_bolsa_row(row: &Row<'_>) -> RepoResult<Bolsa> {
    Ok(Bolsa {
        id: row.get("id")?,
        nome: row.get("nome")?,
        vertente: row.get("vertente")?,
        salario: row.get("salario")?,
        remunerado: row.get("remunerado")?,
        horas_semanais: row.get("horas_semanais")?,
        quantidade_vagas: row.get("quantidade_vagas")?,
        descricao: row.get("descricao")?,
        data_inicio: row.get("data_inicio")?,
        data_fim: row.get("data_fim")?,
        professor_id: row.get("professor_id")?,
    })
}
