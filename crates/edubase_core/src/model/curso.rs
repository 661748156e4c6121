//! Curso (course) record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted course record. `plataforma_id` is a bare reference id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curso {
    pub id: RecordId,
    pub nome: String,
    pub categoria: Option<String>,
    pub preco: Option<f64>,
    pub plataforma_id: Option<RecordId>,
    pub nivel: Option<String>,
    pub vertente: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl Curso {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Curso", "nome", &self.nome)
    }
}

/// Create input for `criarCurso`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NovoCurso {
    pub nome: String,
    pub categoria: Option<String>,
    pub preco: Option<f64>,
    pub plataforma_id: Option<RecordId>,
    pub nivel: Option<String>,
    pub vertente: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl NovoCurso {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Curso", "nome", &self.nome)
    }
}

/// Partial-update input for `updateCurso`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CursoPatch {
    pub id: RecordId,
    pub nome: Option<String>,
    pub categoria: Option<String>,
    pub preco: Option<f64>,
    pub plataforma_id: Option<RecordId>,
    pub nivel: Option<String>,
    pub vertente: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl Patch for CursoPatch {
    type Record = Curso;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Curso) -> Curso {
        if let Some(value) = &self.nome {
            current.nome = value.clone();
        }
        if let Some(value) = &self.categoria {
            current.categoria = Some(value.clone());
        }
        if let Some(value) = self.preco {
            current.preco = Some(value);
        }
        if let Some(value) = self.plataforma_id {
            current.plataforma_id = Some(value);
        }
        if let Some(value) = &self.nivel {
            current.nivel = Some(value.clone());
        }
        if let Some(value) = &self.vertente {
            current.vertente = Some(value.clone());
        }
        if let Some(value) = self.data_inicio {
            current.data_inicio = Some(value);
        }
        if let Some(value) = self.data_fim {
            current.data_fim = Some(value);
        }
        current
    }
}
