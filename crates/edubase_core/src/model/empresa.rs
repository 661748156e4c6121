//! Empresa (company) record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted company record. `endereco_id` is a bare reference id; the store
/// does not check that the address row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empresa {
    pub id: RecordId,
    pub nome: String,
    pub vertente: Option<String>,
    // The external field name is uppercase in the published contract.
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    pub endereco_id: Option<RecordId>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub status: Option<bool>,
}

impl Empresa {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Empresa", "nome", &self.nome)
    }
}

/// Create input for `criarEmpresa`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovaEmpresa {
    pub nome: String,
    pub vertente: Option<String>,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    pub endereco_id: Option<RecordId>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub status: Option<bool>,
}

impl NovaEmpresa {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Empresa", "nome", &self.nome)
    }
}

/// Partial-update input for `updateEmpresa`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpresaPatch {
    pub id: RecordId,
    pub nome: Option<String>,
    pub vertente: Option<String>,
    #[serde(rename = "CNPJ")]
    pub cnpj: Option<String>,
    pub endereco_id: Option<RecordId>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub status: Option<bool>,
}

impl Patch for EmpresaPatch {
    type Record = Empresa;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Empresa) -> Empresa {
        if let Some(value) = &self.nome {
            current.nome = value.clone();
        }
        if let Some(value) = &self.vertente {
            current.vertente = Some(value.clone());
        }
        if let Some(value) = &self.cnpj {
            current.cnpj = Some(value.clone());
        }
        if let Some(value) = self.endereco_id {
            current.endereco_id = Some(value);
        }
        if let Some(value) = &self.telefone {
            current.telefone = Some(value.clone());
        }
        if let Some(value) = &self.email {
            current.email = Some(value.clone());
        }
        if let Some(value) = &self.website {
            current.website = Some(value.clone());
        }
        if let Some(value) = self.status {
            current.status = Some(value);
        }
        current
    }
}
