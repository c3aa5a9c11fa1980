use serde::{Deserialize, Serialize};

/// A registered doctor.
///
/// There is no uniqueness constraint on `nome`: two doctors may share a
/// name and are told apart only by their surrogate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medico {
    /// Surrogate identifier, assigned by the storage layer. Immutable,
    /// never reused within a connection's lifetime.
    pub id: i64,

    /// Full name (required)
    pub nome: String,

    /// Medical specialty, free text
    pub especialidade: Option<String>,
}

impl Medico {
    /// Human-readable picker label: `"Nome (Especialidade)"` when a
    /// specialty is present, plain `nome` otherwise.
    pub fn display_label(&self) -> String {
        match self.especialidade.as_deref() {
            Some(e) if !e.is_empty() => format!("{} ({})", self.nome, e),
            _ => self.nome.clone(),
        }
    }
}
