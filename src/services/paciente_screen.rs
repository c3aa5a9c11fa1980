// src/services/paciente_screen.rs
use std::sync::Arc;

use crate::domain::{validate_paciente, DomainError, Paciente};
use crate::repositories::PacienteRepository;
use crate::services::screen::{CommitAction, ScreenState};
use crate::services::surface::{PacienteForm, PacienteSurface};

fn opt(field: &str) -> Option<&str> {
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

/// Selection synchronizer for the patient screen.
pub struct PacienteScreen {
    repo: Arc<dyn PacienteRepository>,
    rows: Vec<Paciente>,
    selected: Option<i64>,
    state: ScreenState,
}

impl PacienteScreen {
    pub fn new(repo: Arc<dyn PacienteRepository>) -> Self {
        Self {
            repo,
            rows: Vec::new(),
            selected: None,
            state: ScreenState::Idle,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Re-queries the repository and replaces the displayed rows.
    pub fn refresh(&mut self, surface: &mut dyn PacienteSurface) {
        match self.repo.list_all() {
            Ok(rows) => {
                self.rows = rows;
                self.selected = None;
                self.state = ScreenState::Loaded;
                surface.render_rows(&self.rows);
            }
            Err(e) => {
                log::error!("failed to load pacientes: {}", e);
                surface.notify_error("Falha ao carregar pacientes.");
            }
        }
    }

    /// Mirrors the chosen row's fields into the edit form.
    pub fn select(&mut self, id: i64, surface: &mut dyn PacienteSurface) {
        let Some(row) = self.rows.iter().find(|p| p.id == id).cloned() else {
            log::warn!("select ignored: paciente {} is not in the displayed rows", id);
            return;
        };

        surface.write_form(&PacienteForm {
            nome: row.nome,
            data_nascimento: row.data_nascimento.unwrap_or_default(),
            telefone: row.telefone.unwrap_or_default(),
        });
        self.selected = Some(id);
        self.state = ScreenState::Selected;
    }

    /// Validates the form and persists it as a new or updated patient.
    pub fn commit(&mut self, action: CommitAction, surface: &mut dyn PacienteSurface) {
        let form = surface.read_form();

        if let Err(DomainError::InvariantViolation(msg)) = validate_paciente(&form.nome) {
            surface.notify_error(&msg);
            return;
        }

        match action {
            CommitAction::Create => {
                match self
                    .repo
                    .add(&form.nome, opt(&form.data_nascimento), opt(&form.telefone))
                {
                    Ok(_) => surface.notify_info("Paciente adicionado com sucesso!"),
                    Err(e) => {
                        log::error!("failed to add paciente: {}", e);
                        surface.notify_error("Falha ao adicionar paciente.");
                        return;
                    }
                }
            }
            CommitAction::Update => {
                let Some(id) = self.selected else {
                    surface.notify_error("Selecione um paciente para atualizar.");
                    return;
                };
                match self.repo.update(
                    id,
                    &form.nome,
                    opt(&form.data_nascimento),
                    opt(&form.telefone),
                ) {
                    Ok(true) => surface.notify_info("Paciente atualizado com sucesso!"),
                    Ok(false) => {
                        surface.notify_error("Falha ao atualizar paciente.");
                        return;
                    }
                    Err(e) => {
                        log::error!("failed to update paciente {}: {}", id, e);
                        surface.notify_error("Falha ao atualizar paciente.");
                        return;
                    }
                }
            }
        }

        self.refresh(surface);
        surface.clear_form();
    }

    /// Deletes the selected patient after confirmation. The confirmation
    /// warns about the cascade to dependent appointments.
    pub fn remove(&mut self, surface: &mut dyn PacienteSurface) {
        let Some(id) = self.selected else {
            surface.notify_error("Selecione um paciente para deletar.");
            return;
        };
        let nome = self
            .rows
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.nome.clone())
            .unwrap_or_default();

        let confirmed = surface.confirm(&format!(
            "Tem certeza que deseja deletar o paciente \"{}\"? \
             Isso também deletará todas as consultas associadas a ele.",
            nome
        ));
        if !confirmed {
            return;
        }

        match self.repo.delete(id) {
            Ok(true) => surface.notify_info("Paciente deletado com sucesso!"),
            Ok(false) => {
                surface.notify_error("Falha ao deletar paciente.");
                return;
            }
            Err(e) => {
                log::error!("failed to delete paciente {}: {}", id, e);
                surface.notify_error("Falha ao deletar paciente.");
                return;
            }
        }

        self.refresh(surface);
        surface.clear_form();
    }

    /// Resets form and selection. Legal in any state.
    pub fn clear(&mut self, surface: &mut dyn PacienteSurface) {
        surface.clear_form();
        self.selected = None;
        if self.state == ScreenState::Selected {
            self.state = ScreenState::Loaded;
        }
    }
}
