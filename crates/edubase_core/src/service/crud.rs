//! Generic CRUD resolvers shared by all seven entities.
//!
//! # Responsibility
//! - Implement the transactional mutation protocol exactly once.
//! - Keep per-entity code limited to SQL and record shapes.
//!
//! # Invariants
//! - Mutations run inside a single `Immediate` transaction; every exit path
//!   that does not reach `commit` rolls back (rusqlite drop behavior).
//! - Patch fields set to `None` never modify stored values.
//! - Record ids are never mutated.

use crate::model::{Patch, RecordId};
use crate::repo::Repository;
use crate::service::{ResolverError, ResolverResult};
use log::info;
use rusqlite::{Connection, TransactionBehavior};
use serde::{Deserialize, Serialize};

/// Acknowledgment payload returned by delete resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mensagem {
    pub ok: bool,
    pub message: String,
}

/// Lists every stored record, in natural scan order.
pub fn listar<R: Repository>(conn: &Connection) -> ResolverResult<Vec<R::Record>> {
    Ok(R::list(conn)?)
}

/// Fetches one record by id.
pub fn buscar_por_id<R: Repository>(conn: &Connection, id: RecordId) -> ResolverResult<R::Record> {
    match R::get(conn, id)? {
        Some(record) => Ok(record),
        None => Err(ResolverError::NotFound {
            entity: R::LABEL,
            id,
        }),
    }
}

/// Inserts a draft and returns the persisted record.
///
/// The row is reloaded from the store before commit so store-assigned values
/// (the generated id in particular) are echoed exactly as stored.
pub fn criar<R: Repository>(conn: &mut Connection, draft: &R::Draft) -> ResolverResult<R::Record> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let id = R::insert(&tx, draft)?;
    let record = match R::get(&tx, id)? {
        Some(record) => record,
        None => {
            return Err(ResolverError::Store(format!(
                "{} row missing after insert: id={id}",
                R::LABEL
            )))
        }
    };
    tx.commit()?;

    info!(
        "event=record_created module=service entity={} id={id}",
        R::LABEL
    );
    Ok(record)
}

/// Applies a partial update and returns the reloaded record.
///
/// Protocol: fetch the target row inside the transaction (NotFound rolls
/// back), overlay the non-`None` patch fields, persist, reload, commit.
/// `None` patch fields leave the stored value untouched; there is no way to
/// clear a stored value back to null through this operation.
pub fn atualizar<R, P>(conn: &mut Connection, patch: &P) -> ResolverResult<R::Record>
where
    R: Repository,
    P: Patch<Record = R::Record>,
{
    let id = patch.id();
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let current = match R::get(&tx, id)? {
        Some(record) => record,
        None => {
            return Err(ResolverError::NotFound {
                entity: R::LABEL,
                id,
            })
        }
    };

    let merged = patch.apply(current);
    R::update(&tx, &merged)?;

    let reloaded = match R::get(&tx, id)? {
        Some(record) => record,
        None => {
            return Err(ResolverError::Store(format!(
                "{} row missing after update: id={id}",
                R::LABEL
            )))
        }
    };
    tx.commit()?;

    info!(
        "event=record_updated module=service entity={} id={id}",
        R::LABEL
    );
    Ok(reloaded)
}

/// Deletes one record by id and acknowledges success.
///
/// A single generic resolver covers every entity; the marker type supplies
/// the table and the user-facing label.
pub fn remover<R: Repository>(conn: &mut Connection, id: RecordId) -> ResolverResult<Mensagem> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if R::get(&tx, id)?.is_none() {
        return Err(ResolverError::NotFound {
            entity: R::LABEL,
            id,
        });
    }
    R::delete(&tx, id)?;
    tx.commit()?;

    info!(
        "event=record_deleted module=service entity={} id={id}",
        R::LABEL
    );
    Ok(Mensagem {
        ok: true,
        message: "Elemento deletado com sucesso.".to_string(),
    })
}
