// src/services/medico_screen_tests.rs
//
// UNIT TESTS: doctor screen synchronization protocol
//
// INVARIANTS TESTED:
// - refresh renders the repository's rows, name-sorted
// - commit validates before any repository call
// - the repository's "no row matched" is the sole authority when the
//   underlying list changed between refresh and commit

#[cfg(test)]
mod protocol_tests {
    use mockall::predicate::eq;
    use std::sync::Arc;

    use crate::db::{create_test_pool, initialize_database};
    use crate::repositories::{MedicoRepository, SqliteMedicoRepository};
    use crate::services::medico_screen::MedicoScreen;
    use crate::services::screen::{CommitAction, ScreenState};
    use crate::services::surface::{MedicoForm, MockMedicoSurface};

    fn test_repo() -> Arc<SqliteMedicoRepository> {
        let pool = Arc::new(create_test_pool().unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        Arc::new(SqliteMedicoRepository::new(pool))
    }

    #[test]
    fn test_refresh_renders_sorted_rows() {
        let repo = test_repo();
        repo.add("Dr. Zilda", None).unwrap();
        repo.add("Dr. Ana", Some("Cardiologia")).unwrap();

        let mut screen = MedicoScreen::new(repo);
        let mut surface = MockMedicoSurface::new();
        surface
            .expect_render_rows()
            .withf(|rows| rows.len() == 2 && rows[0].nome == "Dr. Ana")
            .times(1)
            .return_const(());

        screen.refresh(&mut surface);
        assert_eq!(screen.state(), ScreenState::Loaded);
    }

    #[test]
    fn test_commit_create_rejects_empty_name_before_any_write() {
        let repo = test_repo();
        let mut screen = MedicoScreen::new(repo.clone());

        let mut surface = MockMedicoSurface::new();
        surface
            .expect_read_form()
            .return_const(MedicoForm::default());
        surface
            .expect_notify_error()
            .with(eq("O nome do médico é obrigatório."))
            .times(1)
            .return_const(());

        screen.commit(CommitAction::Create, &mut surface);

        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_commit_create_persists_then_reloads_and_clears() {
        let repo = test_repo();
        let mut screen = MedicoScreen::new(repo.clone());

        let mut surface = MockMedicoSurface::new();
        surface.expect_read_form().return_const(MedicoForm {
            nome: "Dr. Ana".to_string(),
            especialidade: "Cardiologia".to_string(),
        });
        surface
            .expect_notify_info()
            .with(eq("Médico adicionado com sucesso!"))
            .times(1)
            .return_const(());
        surface
            .expect_render_rows()
            .withf(|rows| rows.len() == 1 && rows[0].nome == "Dr. Ana")
            .times(1)
            .return_const(());
        surface.expect_clear_form().times(1).return_const(());

        screen.commit(CommitAction::Create, &mut surface);

        let medicos = repo.list_all().unwrap();
        assert_eq!(medicos.len(), 1);
        assert_eq!(medicos[0].especialidade.as_deref(), Some("Cardiologia"));
        assert_eq!(screen.state(), ScreenState::Loaded);
        assert_eq!(screen.selected(), None);
    }

    #[test]
    fn test_select_mirrors_row_into_form() {
        let repo = test_repo();
        let id = repo.add("Dr. Ana", Some("Cardiologia")).unwrap();
        let mut screen = MedicoScreen::new(repo);

        let mut surface = MockMedicoSurface::new();
        surface.expect_render_rows().return_const(());
        surface
            .expect_write_form()
            .withf(|form: &MedicoForm| {
                form.nome == "Dr. Ana" && form.especialidade == "Cardiologia"
            })
            .times(1)
            .return_const(());

        screen.refresh(&mut surface);
        screen.select(id, &mut surface);

        assert_eq!(screen.state(), ScreenState::Selected);
        assert_eq!(screen.selected(), Some(id));
    }

    #[test]
    fn test_commit_update_without_selection_is_an_error() {
        let repo = test_repo();
        let mut screen = MedicoScreen::new(repo);

        let mut surface = MockMedicoSurface::new();
        surface.expect_read_form().return_const(MedicoForm {
            nome: "Dr. Ana".to_string(),
            especialidade: String::new(),
        });
        surface
            .expect_notify_error()
            .with(eq("Selecione um médico para atualizar."))
            .times(1)
            .return_const(());

        screen.commit(CommitAction::Update, &mut surface);
    }

    #[test]
    fn test_commit_update_on_vanished_row_reports_failure() {
        let repo = test_repo();
        let id = repo.add("Dr. Ana", None).unwrap();
        let mut screen = MedicoScreen::new(repo.clone());

        let mut surface = MockMedicoSurface::new();
        surface.expect_render_rows().return_const(());
        surface.expect_write_form().return_const(());
        surface.expect_read_form().return_const(MedicoForm {
            nome: "Dr. Ana Souza".to_string(),
            especialidade: String::new(),
        });
        surface
            .expect_notify_error()
            .with(eq("Falha ao atualizar médico."))
            .times(1)
            .return_const(());

        screen.refresh(&mut surface);
        screen.select(id, &mut surface);

        // Row vanishes underneath the pending commit (e.g. deleted by
        // another screen). The update must not be assumed successful.
        repo.delete(id).unwrap();
        screen.commit(CommitAction::Update, &mut surface);

        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_remove_requires_selection() {
        let repo = test_repo();
        let mut screen = MedicoScreen::new(repo);

        let mut surface = MockMedicoSurface::new();
        surface
            .expect_notify_error()
            .with(eq("Selecione um médico para deletar."))
            .times(1)
            .return_const(());

        screen.remove(&mut surface);
    }

    #[test]
    fn test_remove_confirmation_warns_about_cascade() {
        let repo = test_repo();
        let id = repo.add("Dr. Ana", None).unwrap();
        let mut screen = MedicoScreen::new(repo.clone());

        let mut surface = MockMedicoSurface::new();
        surface.expect_render_rows().return_const(());
        surface.expect_write_form().return_const(());
        surface.expect_clear_form().return_const(());
        surface
            .expect_confirm()
            .withf(|message: &str| {
                message.contains("Dr. Ana") && message.contains("consultas associadas")
            })
            .times(1)
            .return_const(true);
        surface
            .expect_notify_info()
            .with(eq("Médico deletado com sucesso!"))
            .times(1)
            .return_const(());

        screen.refresh(&mut surface);
        screen.select(id, &mut surface);
        screen.remove(&mut surface);

        assert!(repo.list_all().unwrap().is_empty());
        assert_eq!(screen.state(), ScreenState::Loaded);
    }

    #[test]
    fn test_remove_declined_keeps_row() {
        let repo = test_repo();
        let id = repo.add("Dr. Ana", None).unwrap();
        let mut screen = MedicoScreen::new(repo.clone());

        let mut surface = MockMedicoSurface::new();
        surface.expect_render_rows().return_const(());
        surface.expect_write_form().return_const(());
        surface.expect_confirm().return_const(false);

        screen.refresh(&mut surface);
        screen.select(id, &mut surface);
        screen.remove(&mut surface);

        assert_eq!(repo.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_is_legal_in_any_state() {
        let repo = test_repo();
        let id = repo.add("Dr. Ana", None).unwrap();
        let mut screen = MedicoScreen::new(repo);

        let mut surface = MockMedicoSurface::new();
        surface.expect_clear_form().return_const(());
        surface.expect_render_rows().return_const(());
        surface.expect_write_form().return_const(());

        // Idle
        screen.clear(&mut surface);
        assert_eq!(screen.state(), ScreenState::Idle);

        // Selected -> Loaded
        screen.refresh(&mut surface);
        screen.select(id, &mut surface);
        screen.clear(&mut surface);
        assert_eq!(screen.state(), ScreenState::Loaded);
        assert_eq!(screen.selected(), None);
    }
}
