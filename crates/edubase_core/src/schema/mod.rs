//! External typed-operation contract and response envelope.
//!
//! # Responsibility
//! - Declare the operation-document surface with the exact public operation
//!   names.
//! - Convert resolver results into the `data`/`errors` response envelope.
//!
//! # Invariants
//! - Successful responses carry `data` keyed by the operation name and no
//!   `errors` entry; failed responses carry `errors` and no `data`.
//! - Exactly one resolver runs per operation document.

use serde::Serialize;
use serde_json::Value;

mod operations;

pub use operations::{execute, GetId, Operation};

/// Response envelope mirroring typed-query-language conventions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<OperationError>,
}

/// One entry of the envelope `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationError {
    pub message: String,
}

impl Envelope {
    pub(crate) fn data(name: &str, value: Value) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert(name.to_string(), value);
        Self {
            data: Some(Value::Object(fields)),
            errors: Vec::new(),
        }
    }

    pub(crate) fn fail(message: String) -> Self {
        Self {
            data: None,
            errors: vec![OperationError { message }],
        }
    }
}
