use crate::domain::{DomainError, DomainResult};

/// Validates the editable doctor fields before any persistence call.
/// The repository itself never re-validates business rules.
pub fn validate_medico(nome: &str) -> DomainResult<()> {
    if nome.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "O nome do médico é obrigatório.".to_string(),
        ));
    }
    Ok(())
}
