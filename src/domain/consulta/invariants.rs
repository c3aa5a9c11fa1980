use chrono::NaiveDateTime;

use crate::domain::{DomainError, DomainResult};

/// Canonical appointment date-time format
pub const FORMATO_DATA_HORA: &str = "%Y-%m-%d %H:%M";

/// Validates the editable appointment fields before any persistence call.
/// `medico` and `paciente` are the picker labels, not identifiers.
pub fn validate_consulta(medico: &str, paciente: &str, data_hora: &str) -> DomainResult<()> {
    if medico.trim().is_empty() || paciente.trim().is_empty() || data_hora.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Médico, Paciente e Data/Hora são obrigatórios.".to_string(),
        ));
    }
    validate_data_hora(data_hora)
}

/// The date-time string must parse under the canonical format.
/// Malformed input is rejected before any write reaches the repository.
pub fn validate_data_hora(data_hora: &str) -> DomainResult<()> {
    NaiveDateTime::parse_from_str(data_hora, FORMATO_DATA_HORA)
        .map(|_| ())
        .map_err(|_| {
            DomainError::InvariantViolation(
                "Formato de Data/Hora inválido. Use AAAA-MM-DD HH:MM.".to_string(),
            )
        })
}
