// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant re-validation (callers validate before invoking)
// - NO cross-repository calls
// - Explicit SQL only
// - One transaction per operation; a failed transaction leaves no
//   partial write behind

pub mod consulta_repository;
pub mod medico_repository;
pub mod paciente_repository;

pub use consulta_repository::{ConsultaRepository, SqliteConsultaRepository};
pub use medico_repository::{MedicoRepository, SqliteMedicoRepository};
pub use paciente_repository::{PacienteRepository, SqlitePacienteRepository};
