// src/services/consulta_screen.rs
//
// The appointment screen carries the extra synchronization burden: its
// pickers expose human-readable labels while persistence wants the
// underlying identifiers, so every refresh rebuilds the label->id
// indexes from scratch. Staleness is resolved by full rebuild, never by
// piecemeal invalidation.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{validate_consulta, ConsultaDetalhada, DomainError};
use crate::repositories::{ConsultaRepository, MedicoRepository, PacienteRepository};
use crate::services::screen::{CommitAction, ScreenState};
use crate::services::surface::{ConsultaForm, ConsultaSurface};

fn opt(field: &str) -> Option<&str> {
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn label_for(index: &BTreeMap<String, i64>, id: i64) -> Option<&str> {
    index
        .iter()
        .find(|(_, v)| **v == id)
        .map(|(k, _)| k.as_str())
}

/// Selection synchronizer for the appointment screen.
pub struct ConsultaScreen {
    consulta_repo: Arc<dyn ConsultaRepository>,
    medico_repo: Arc<dyn MedicoRepository>,
    paciente_repo: Arc<dyn PacienteRepository>,
    rows: Vec<ConsultaDetalhada>,
    // Labels are unique keys: two rows with the same label collapse to
    // the later one, and the picker could not tell them apart anyway.
    medicos_map: BTreeMap<String, i64>,
    pacientes_map: BTreeMap<String, i64>,
    selected: Option<i64>,
    state: ScreenState,
}

impl ConsultaScreen {
    pub fn new(
        consulta_repo: Arc<dyn ConsultaRepository>,
        medico_repo: Arc<dyn MedicoRepository>,
        paciente_repo: Arc<dyn PacienteRepository>,
    ) -> Self {
        Self {
            consulta_repo,
            medico_repo,
            paciente_repo,
            rows: Vec::new(),
            medicos_map: BTreeMap::new(),
            pacientes_map: BTreeMap::new(),
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

    /// Re-queries the repositories, replaces the displayed rows and
    /// rebuilds both picker indexes (a doctor or patient may have been
    /// added or renamed on another screen since the last load).
    pub fn refresh(&mut self, surface: &mut dyn ConsultaSurface) {
        let rows = match self.consulta_repo.list_all() {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("failed to load consultas: {}", e);
                surface.notify_error("Falha ao carregar consultas.");
                return;
            }
        };
        if let Err(e) = self.rebuild_indexes() {
            log::error!("failed to rebuild picker indexes: {}", e);
            surface.notify_error("Falha ao carregar consultas.");
            return;
        }

        self.rows = rows;
        self.selected = None;
        self.state = ScreenState::Loaded;

        let medico_labels: Vec<String> = self.medicos_map.keys().cloned().collect();
        let paciente_labels: Vec<String> = self.pacientes_map.keys().cloned().collect();
        surface.set_picker_options(&medico_labels, &paciente_labels);
        surface.render_rows(&self.rows);
    }

    fn rebuild_indexes(&mut self) -> crate::error::AppResult<()> {
        self.medicos_map.clear();
        for medico in self.medico_repo.list_all()? {
            self.medicos_map.insert(medico.display_label(), medico.id);
        }

        self.pacientes_map.clear();
        for paciente in self.paciente_repo.list_all()? {
            self.pacientes_map.insert(paciente.nome.clone(), paciente.id);
        }

        Ok(())
    }

    /// Mirrors the chosen row into the edit form. The stored doctor and
    /// patient identifiers are re-resolved against the current indexes
    /// rather than echoing stored text: labels may have shifted since the
    /// appointment was created. An identifier with no label clears that
    /// picker — a recoverable inconsistency, not a fatal one.
    pub fn select(&mut self, id: i64, surface: &mut dyn ConsultaSurface) {
        let Some(row) = self.rows.iter().find(|c| c.id == id).cloned() else {
            log::warn!("select ignored: consulta {} is not in the displayed rows", id);
            return;
        };

        let medico = label_for(&self.medicos_map, row.id_medico);
        if medico.is_none() {
            log::warn!(
                "consulta {}: id_medico {} no longer resolves to a picker label",
                id,
                row.id_medico
            );
        }
        let paciente = label_for(&self.pacientes_map, row.id_paciente);
        if paciente.is_none() {
            log::warn!(
                "consulta {}: id_paciente {} no longer resolves to a picker label",
                id,
                row.id_paciente
            );
        }

        surface.write_form(&ConsultaForm {
            medico: medico.unwrap_or_default().to_string(),
            paciente: paciente.unwrap_or_default().to_string(),
            data_hora: row.data_hora,
            observacoes: row.observacoes.unwrap_or_default(),
        });
        self.selected = Some(id);
        self.state = ScreenState::Selected;
    }

    /// Validates the form and persists it as a new or updated
    /// appointment. Validation failures abort before any repository call.
    pub fn commit(&mut self, action: CommitAction, surface: &mut dyn ConsultaSurface) {
        let form = surface.read_form();

        if let Err(DomainError::InvariantViolation(msg)) =
            validate_consulta(&form.medico, &form.paciente, &form.data_hora)
        {
            surface.notify_error(&msg);
            return;
        }

        let (Some(id_medico), Some(id_paciente)) = (
            self.medicos_map.get(&form.medico).copied(),
            self.pacientes_map.get(&form.paciente).copied(),
        ) else {
            surface.notify_error("Médico ou Paciente inválido selecionado.");
            return;
        };

        match action {
            CommitAction::Create => {
                match self.consulta_repo.add(
                    id_medico,
                    id_paciente,
                    &form.data_hora,
                    opt(&form.observacoes),
                ) {
                    Ok(_) => surface.notify_info("Consulta agendada com sucesso!"),
                    Err(e) => {
                        log::error!("failed to schedule consulta: {}", e);
                        surface.notify_error("Falha ao agendar consulta.");
                        return;
                    }
                }
            }
            CommitAction::Update => {
                let Some(id) = self.selected else {
                    surface.notify_error("Selecione uma consulta para atualizar.");
                    return;
                };
                // The repository's row count is the sole authority: the row
                // may have been cascaded away since refresh.
                match self.consulta_repo.update(
                    id,
                    id_medico,
                    id_paciente,
                    &form.data_hora,
                    opt(&form.observacoes),
                ) {
                    Ok(true) => surface.notify_info("Consulta atualizada com sucesso!"),
                    Ok(false) => {
                        surface.notify_error("Falha ao atualizar consulta.");
                        return;
                    }
                    Err(e) => {
                        log::error!("failed to update consulta {}: {}", id, e);
                        surface.notify_error("Falha ao atualizar consulta.");
                        return;
                    }
                }
            }
        }

        self.refresh(surface);
        surface.clear_form();
    }

    /// Deletes the selected appointment after confirmation.
    pub fn remove(&mut self, surface: &mut dyn ConsultaSurface) {
        let Some(id) = self.selected else {
            surface.notify_error("Selecione uma consulta para deletar.");
            return;
        };
        let data_hora = self
            .rows
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.data_hora.clone())
            .unwrap_or_default();

        let confirmed = surface.confirm(&format!(
            "Tem certeza que deseja deletar a consulta do dia {}?",
            data_hora
        ));
        if !confirmed {
            return;
        }

        match self.consulta_repo.delete(id) {
            Ok(true) => surface.notify_info("Consulta deletada com sucesso!"),
            Ok(false) => {
                surface.notify_error("Falha ao deletar consulta.");
                return;
            }
            Err(e) => {
                log::error!("failed to delete consulta {}: {}", id, e);
                surface.notify_error("Falha ao deletar consulta.");
                return;
            }
        }

        self.refresh(surface);
        surface.clear_form();
    }

    /// Resets form, picker choices and selection. Legal in any state.
    pub fn clear(&mut self, surface: &mut dyn ConsultaSurface) {
        surface.clear_form();
        self.selected = None;
        if self.state == ScreenState::Selected {
            self.state = ScreenState::Loaded;
        }
    }
}
