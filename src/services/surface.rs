// src/services/surface.rs
//
// Presentation surface contracts
//
// The widget toolkit is an external collaborator. It must supply a row
// list, editable text fields, a confirmation prompt and a notification
// channel; the screens call these traits and never touch a widget.
// Form structs mirror the editable fields: an empty string is an empty
// field, exactly like the text entry it stands for.

#[cfg(test)]
use mockall::automock;

use crate::domain::{ConsultaDetalhada, Medico, Paciente};

/// Field values of the doctor form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicoForm {
    pub nome: String,
    pub especialidade: String,
}

/// Field values of the patient form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacienteForm {
    pub nome: String,
    pub data_nascimento: String,
    pub telefone: String,
}

/// Field values of the appointment form. `medico` and `paciente` carry
/// the display label currently chosen in the picker, never an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultaForm {
    pub medico: String,
    pub paciente: String,
    pub data_hora: String,
    pub observacoes: String,
}

#[cfg_attr(test, automock)]
pub trait MedicoSurface {
    fn render_rows(&mut self, rows: &[Medico]);
    fn read_form(&self) -> MedicoForm;
    fn write_form(&mut self, form: &MedicoForm);
    fn clear_form(&mut self);
    fn confirm(&mut self, message: &str) -> bool;
    fn notify_info(&mut self, message: &str);
    fn notify_error(&mut self, message: &str);
}

#[cfg_attr(test, automock)]
pub trait PacienteSurface {
    fn render_rows(&mut self, rows: &[Paciente]);
    fn read_form(&self) -> PacienteForm;
    fn write_form(&mut self, form: &PacienteForm);
    fn clear_form(&mut self);
    fn confirm(&mut self, message: &str) -> bool;
    fn notify_info(&mut self, message: &str);
    fn notify_error(&mut self, message: &str);
}

#[cfg_attr(test, automock)]
pub trait ConsultaSurface {
    fn render_rows(&mut self, rows: &[ConsultaDetalhada]);
    /// Repopulate the dependent pickers with the current display labels.
    fn set_picker_options(&mut self, medicos: &[String], pacientes: &[String]);
    fn read_form(&self) -> ConsultaForm;
    fn write_form(&mut self, form: &ConsultaForm);
    fn clear_form(&mut self);
    fn confirm(&mut self, message: &str) -> bool;
    fn notify_info(&mut self, message: &str);
    fn notify_error(&mut self, message: &str);
}
