//! Bolsa (research scholarship) record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted scholarship record.
///
/// Same `remunerado`/`salario` convention as `Estagio`: correlated at
/// creation by habit, never enforced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolsa {
    pub id: RecordId,
    pub nome: String,
    pub vertente: Option<String>,
    pub salario: Option<f64>,
    pub remunerado: Option<bool>,
    pub horas_semanais: Option<i64>,
    pub quantidade_vagas: Option<i64>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub professor_id: Option<RecordId>,
}

impl Bolsa {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Bolsa", "nome", &self.nome)
    }
}

/// Create input for `criarBolsa`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NovaBolsa {
    pub nome: String,
    pub vertente: Option<String>,
    pub salario: Option<f64>,
    pub remunerado: Option<bool>,
    pub horas_semanais: Option<i64>,
    pub quantidade_vagas: Option<i64>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub professor_id: Option<RecordId>,
}

impl NovaBolsa {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Bolsa", "nome", &self.nome)
    }
}

/// Partial-update input for `updateBolsa`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BolsaPatch {
    pub id: RecordId,
    pub nome: Option<String>,
    pub vertente: Option<String>,
    pub salario: Option<f64>,
    pub remunerado: Option<bool>,
    pub horas_semanais: Option<i64>,
    pub quantidade_vagas: Option<i64>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub professor_id: Option<RecordId>,
}

impl Patch for BolsaPatch {
    type Record = Bolsa;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Bolsa) -> Bolsa {
        if let Some(value) = &self.nome {
            current.nome = value.clone();
        }
        if let Some(value) = &self.vertente {
            current.vertente = Some(value.clone());
        }
        if let Some(value) = self.salario {
            current.salario = Some(value);
        }
        if let Some(value) = self.remunerado {
            current.remunerado = Some(value);
        }
        if let Some(value) = self.horas_semanais {
            current.horas_semanais = Some(value);
        }
        if let Some(value) = self.quantidade_vagas {
            current.quantidade_vagas = Some(value);
        }
        if let Some(value) = &self.descricao {
            current.descricao = Some(value.clone());
        }
        if let Some(value) = self.data_inicio {
            current.data_inicio = Some(value);
        }
        if let Some(value) = self.data_fim {
            current.data_fim = Some(value);
        }
        if let Some(value) = self.professor_id {
            current.professor_id = Some(value);
        }
        current
    }
}
