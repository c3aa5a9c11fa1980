// src/services/mod.rs
//
// Selection Synchronizer Layer
//
// One screen per entity, all following the same protocol:
// load -> select -> edit -> commit -> reload. Screens orchestrate the
// repositories and talk to the widget toolkit only through the surface
// traits.

pub mod consulta_screen;
pub mod medico_screen;
pub mod paciente_screen;
pub mod screen;
pub mod surface;

#[cfg(test)]
mod medico_screen_tests;

pub use consulta_screen::ConsultaScreen;
pub use medico_screen::MedicoScreen;
pub use paciente_screen::PacienteScreen;
pub use screen::{CommitAction, ScreenState};
pub use surface::{
    ConsultaForm, ConsultaSurface, MedicoForm, MedicoSurface, PacienteForm, PacienteSurface,
};
