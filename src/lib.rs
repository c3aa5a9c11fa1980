// src/lib.rs
// MedAgenda - Local-first medical appointment agenda core
//
// Architecture:
// - db: pooled SQLite access, idempotent schema provisioning
// - domain: entities plus the invariants validated before any write
// - repositories: dumb data mappers, one per entity
// - services: per-screen selection synchronizers following the shared
//   load -> select -> edit -> commit -> reload protocol
// - The widget toolkit stays outside: screens drive the surface traits
//   and never touch a widget

pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_consulta,
    validate_data_hora,
    validate_medico,
    validate_paciente,
    // Consulta
    ConsultaDetalhada,
    DomainError,
    DomainResult,
    // Medico
    Medico,
    // Paciente
    Paciente,
    FORMATO_DATA_HORA,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_connection_pool_at, get_database_path, initialize_database,
    ConnectionPool,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ConsultaRepository,
    MedicoRepository,
    PacienteRepository,
    SqliteConsultaRepository,
    SqliteMedicoRepository,
    SqlitePacienteRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    CommitAction,
    ConsultaForm,
    // Appointment screen
    ConsultaScreen,
    ConsultaSurface,
    MedicoForm,
    // Doctor screen
    MedicoScreen,
    MedicoSurface,
    PacienteForm,
    // Patient screen
    PacienteScreen,
    PacienteSurface,
    ScreenState,
};
