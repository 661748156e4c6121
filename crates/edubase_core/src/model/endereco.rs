//! Endereco (postal address) record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted address record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endereco {
    pub id: RecordId,
    pub rua: String,
    pub numero: Option<i64>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
}

impl Endereco {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Endereco", "rua", &self.rua)
    }
}

/// Create input for `criarEndereco`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovoEndereco {
    pub rua: String,
    pub numero: Option<i64>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
}

impl NovoEndereco {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Endereco", "rua", &self.rua)
    }
}

/// Partial-update input for `updateEndereco`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnderecoPatch {
    pub id: RecordId,
    pub rua: Option<String>,
    pub numero: Option<i64>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
}

impl Patch for EnderecoPatch {
    type Record = Endereco;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Endereco) -> Endereco {
        if let Some(value) = &self.rua {
            current.rua = value.clone();
        }
        if let Some(value) = self.numero {
            current.numero = Some(value);
        }
        if let Some(value) = &self.bairro {
            current.bairro = Some(value.clone());
        }
        if let Some(value) = &self.cidade {
            current.cidade = Some(value.clone());
        }
        if let Some(value) = &self.estado {
            current.estado = Some(value.clone());
        }
        if let Some(value) = &self.cep {
            current.cep = Some(value.clone());
        }
        current
    }
}
