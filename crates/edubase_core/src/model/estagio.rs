//! Estagio (internship) record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted internship record.
///
/// `remunerado` and `salario` are correlated only by convention at creation
/// time; the store does not enforce the pairing and updates may break it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estagio {
    pub id: RecordId,
    pub nome: String,
    pub vertente: Option<String>,
    pub salario: Option<f64>,
    pub empresa_id: Option<RecordId>,
    pub remunerado: Option<bool>,
    pub horas_semanais: Option<i64>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl Estagio {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Estagio", "nome", &self.nome)
    }
}

/// Create input for `criarEstagio`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NovoEstagio {
    pub nome: String,
    pub vertente: Option<String>,
    pub salario: Option<f64>,
    pub empresa_id: Option<RecordId>,
    pub remunerado: Option<bool>,
    pub horas_semanais: Option<i64>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl NovoEstagio {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Estagio", "nome", &self.nome)
    }
}

/// Partial-update input for `updateEstagio`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstagioPatch {
    pub id: RecordId,
    pub nome: Option<String>,
    pub vertente: Option<String>,
    pub salario: Option<f64>,
    pub empresa_id: Option<RecordId>,
    pub remunerado: Option<bool>,
    pub horas_semanais: Option<i64>,
    pub descricao: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

impl Patch for EstagioPatch {
    type Record = Estagio;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Estagio) -> Estagio {
        if let Some(value) = &self.nome {
            current.nome = value.clone();
        }
        if let Some(value) = &self.vertente {
            current.vertente = Some(value.clone());
        }
        if let Some(value) = self.salario {
            current.salario = Some(value);
        }
        if let Some(value) = self.empresa_id {
            current.empresa_id = Some(value);
        }
        if let Some(value) = self.remunerado {
            current.remunerado = Some(value);
        }
        if let Some(value) = self.horas_semanais {
            current.horas_semanais = Some(value);
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
        current
    }
}
