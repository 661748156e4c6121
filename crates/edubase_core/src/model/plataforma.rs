//! Plataforma (course platform) record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted platform record. `tipo` is a free boolean flag with no enforced
/// meaning beyond the original data dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plataforma {
    pub id: RecordId,
    pub nome: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub tipo: Option<bool>,
}

impl Plataforma {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Plataforma", "nome", &self.nome)
    }
}

/// Create input for `criarPlataforma`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovaPlataforma {
    pub nome: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub tipo: Option<bool>,
}

impl NovaPlataforma {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Plataforma", "nome", &self.nome)
    }
}

/// Partial-update input for `updatePlataforma`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlataformaPatch {
    pub id: RecordId,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub tipo: Option<bool>,
}

impl Patch for PlataformaPatch {
    type Record = Plataforma;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Plataforma) -> Plataforma {
        if let Some(value) = &self.nome {
            current.nome = value.clone();
        }
        if let Some(value) = &self.email {
            current.email = Some(value.clone());
        }
        if let Some(value) = &self.website {
            current.website = Some(value.clone());
        }
        if let Some(value) = self.tipo {
            current.tipo = Some(value);
        }
        current
    }
}
