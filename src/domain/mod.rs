// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod consulta;
pub mod medico;
pub mod paciente;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Medico Domain
pub use medico::{validate_medico, Medico};

// Paciente Domain
pub use paciente::{validate_paciente, Paciente};

// Consulta Domain
pub use consulta::{
    validate_consulta, validate_data_hora, ConsultaDetalhada, FORMATO_DATA_HORA,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
