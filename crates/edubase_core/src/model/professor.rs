//! Professor record and operation inputs.

use crate::model::{require_text, Patch, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted professor record. `vertente` is a free-text track label shared
/// loosely across catalog entities, with no enforced enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: RecordId,
    pub nome: String,
    pub vertente: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub formacao: Option<String>,
}

impl Professor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Professor", "nome", &self.nome)
    }
}

/// Create input for `criarProfessor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovoProfessor {
    pub nome: String,
    pub vertente: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub formacao: Option<String>,
}

impl NovoProfessor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("Professor", "nome", &self.nome)
    }
}

/// Partial-update input for `updateProfessor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessorPatch {
    pub id: RecordId,
    pub nome: Option<String>,
    pub vertente: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub formacao: Option<String>,
}

impl Patch for ProfessorPatch {
    type Record = Professor;

    fn id(&self) -> RecordId {
        self.id
    }

    fn apply(&self, mut current: Professor) -> Professor {
        if let Some(value) = &self.nome {
            current.nome = value.clone();
        }
        if let Some(value) = &self.vertente {
            current.vertente = Some(value.clone());
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
        if let Some(value) = &self.formacao {
            current.formacao = Some(value.clone());
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::{Professor, ProfessorPatch};
    use crate::model::Patch;

    fn sample() -> Professor {
        Professor {
            id: 7,
            nome: "Ada".to_string(),
            vertente: Some("Computer Science".to_string()),
            telefone: Some("555-0100".to_string()),
            email: Some("ada@example.edu".to_string()),
            website: None,
            formacao: Some("PhD".to_string()),
        }
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let patch = ProfessorPatch {
            id: 7,
            nome: Some("Ada Lovelace".to_string()),
            ..ProfessorPatch::default()
        };

        let merged = patch.apply(sample());
        assert_eq!(merged.nome, "Ada Lovelace");
        assert_eq!(merged.vertente.as_deref(), Some("Computer Science"));
        assert_eq!(merged.telefone.as_deref(), Some("555-0100"));
        assert_eq!(merged.email.as_deref(), Some("ada@example.edu"));
        assert_eq!(merged.formacao.as_deref(), Some("PhD"));
    }

    #[test]
    fn apply_cannot_clear_a_stored_value() {
        // Every patch field left as None must leave the record untouched.
        let patch = ProfessorPatch {
            id: 7,
            ..ProfessorPatch::default()
        };

        let merged = patch.apply(sample());
        assert_eq!(merged, sample());
    }

    #[test]
    fn apply_can_fill_a_previously_null_field() {
        let patch = ProfessorPatch {
            id: 7,
            website: Some("https://ada.example.edu".to_string()),
            ..ProfessorPatch::default()
        };

        let merged = patch.apply(sample());
        assert_eq!(merged.website.as_deref(), Some("https://ada.example.edu"));
    }
}
