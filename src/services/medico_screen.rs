// src/services/medico_screen.rs
use std::sync::Arc;

use crate::domain::{validate_medico, DomainError, Medico};
use crate::repositories::MedicoRepository;
use crate::services::screen::{CommitAction, ScreenState};
use crate::services::surface::{MedicoForm, MedicoSurface};

/// Selection synchronizer for the doctor screen.
pub struct MedicoScreen {
    repo: Arc<dyn MedicoRepository>,
    rows: Vec<Medico>,
    selected: Option<i64>,
    state: ScreenState,
}

impl MedicoScreen {
    pub fn new(repo: Arc<dyn MedicoRepository>) -> Self {
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
    /// Any previous selection is dropped.
    pub fn refresh(&mut self, surface: &mut dyn MedicoSurface) {
        match self.repo.list_all() {
            Ok(rows) => {
                self.rows = rows;
                self.selected = None;
                self.state = ScreenState::Loaded;
                surface.render_rows(&self.rows);
            }
            Err(e) => {
                log::error!("failed to load medicos: {}", e);
                surface.notify_error("Falha ao carregar médicos.");
            }
        }
    }

    /// Mirrors the chosen row's fields into the edit form.
    pub fn select(&mut self, id: i64, surface: &mut dyn MedicoSurface) {
        let Some(row) = self.rows.iter().find(|m| m.id == id).cloned() else {
            log::warn!("select ignored: medico {} is not in the displayed rows", id);
            return;
        };

        surface.write_form(&MedicoForm {
            nome: row.nome,
            especialidade: row.especialidade.unwrap_or_default(),
        });
        self.selected = Some(id);
        self.state = ScreenState::Selected;
    }

    /// Validates the form and persists it as a new or updated doctor.
    /// Validation failures abort before any repository call.
    pub fn commit(&mut self, action: CommitAction, surface: &mut dyn MedicoSurface) {
        let form = surface.read_form();

        if let Err(DomainError::InvariantViolation(msg)) = validate_medico(&form.nome) {
            surface.notify_error(&msg);
            return;
        }

        let especialidade = if form.especialidade.is_empty() {
            None
        } else {
            Some(form.especialidade.as_str())
        };

        match action {
            CommitAction::Create => match self.repo.add(&form.nome, especialidade) {
                Ok(_) => surface.notify_info("Médico adicionado com sucesso!"),
                Err(e) => {
                    log::error!("failed to add medico: {}", e);
                    surface.notify_error("Falha ao adicionar médico.");
                    return;
                }
            },
            CommitAction::Update => {
                let Some(id) = self.selected else {
                    surface.notify_error("Selecione um médico para atualizar.");
                    return;
                };
                // The repository's row count is the sole authority: the row
                // may have been deleted by another screen since refresh.
                match self.repo.update(id, &form.nome, especialidade) {
                    Ok(true) => surface.notify_info("Médico atualizado com sucesso!"),
                    Ok(false) => {
                        surface.notify_error("Falha ao atualizar médico.");
                        return;
                    }
                    Err(e) => {
                        log::error!("failed to update medico {}: {}", id, e);
                        surface.notify_error("Falha ao atualizar médico.");
                        return;
                    }
                }
            }
        }

        self.refresh(surface);
        surface.clear_form();
    }

    /// Deletes the selected doctor after confirmation. The confirmation
    /// warns about the cascade to dependent appointments.
    pub fn remove(&mut self, surface: &mut dyn MedicoSurface) {
        let Some(id) = self.selected else {
            surface.notify_error("Selecione um médico para deletar.");
            return;
        };
        let nome = self
            .rows
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.nome.clone())
            .unwrap_or_default();

        let confirmed = surface.confirm(&format!(
            "Tem certeza que deseja deletar o médico \"{}\"? \
             Isso também deletará todas as consultas associadas a ele.",
            nome
        ));
        if !confirmed {
            return;
        }

        match self.repo.delete(id) {
            Ok(true) => surface.notify_info("Médico deletado com sucesso!"),
            Ok(false) => {
                surface.notify_error("Falha ao deletar médico.");
                return;
            }
            Err(e) => {
                log::error!("failed to delete medico {}: {}", id, e);
                surface.notify_error("Falha ao deletar médico.");
                return;
            }
        }

        self.refresh(surface);
        surface.clear_form();
    }

    /// Resets form and selection. Legal in any state.
    pub fn clear(&mut self, surface: &mut dyn MedicoSurface) {
        surface.clear_form();
        self.selected = None;
        if self.state == ScreenState::Selected {
            self.state = ScreenState::Loaded;
        }
    }
}
