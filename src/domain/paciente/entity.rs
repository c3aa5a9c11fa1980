use serde::{Deserialize, Serialize};

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paciente {
    /// Surrogate identifier, assigned by the storage layer
    pub id: i64,

    /// Full name (required)
    pub nome: String,

    /// Birth date, stored as free text. Recommended format: YYYY-MM-DD
    pub data_nascimento: Option<String>,

    /// Contact phone, free text
    pub telefone: Option<String>,
}
