// src/repositories/consulta_repository.rs
//
// Appointment persistence
//
// list_all denormalizes through the doctor and patient joins: no screen
// displays raw foreign keys, so every row carries the referenced names.

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::ConsultaDetalhada;
use crate::error::AppResult;

pub trait ConsultaRepository: Send + Sync {
    /// Schedules an appointment and returns the assigned identifier.
    /// Both references must exist; the storage layer rejects dangling ones.
    fn add(
        &self,
        id_medico: i64,
        id_paciente: i64,
        data_hora: &str,
        observacoes: Option<&str>,
    ) -> AppResult<i64>;
    /// Every appointment, date-time ascending, joined to the referenced
    /// doctor's and patient's display names.
    fn list_all(&self) -> AppResult<Vec<ConsultaDetalhada>>;
    /// Full replace of the mutable fields. `false` means no row matched.
    fn update(
        &self,
        id: i64,
        id_medico: i64,
        id_paciente: i64,
        data_hora: &str,
        observacoes: Option<&str>,
    ) -> AppResult<bool>;
    /// `false` means no row matched.
    fn delete(&self, id: i64) -> AppResult<bool>;
    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteConsultaRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteConsultaRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_consulta(row: &Row) -> Result<ConsultaDetalhada, rusqlite::Error> {
        Ok(ConsultaDetalhada {
            id: row.get("id_consulta")?,
            data_hora: row.get("data_hora")?,
            nome_medico: row.get("nome_medico")?,
            nome_paciente: row.get("nome_paciente")?,
            observacoes: row.get("observacoes")?,
            id_medico: row.get("id_medico")?,
            id_paciente: row.get("id_paciente")?,
        })
    }
}

impl ConsultaRepository for SqliteConsultaRepository {
    fn add(
        &self,
        id_medico: i64,
        id_paciente: i64,
        data_hora: &str,
        observacoes: Option<&str>,
    ) -> AppResult<i64> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO consulta (id_medico, id_paciente, data_hora, observacoes)
             VALUES (?1, ?2, ?3, ?4)",
            params![id_medico, id_paciente, data_hora, observacoes],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        log::info!("consulta {} scheduled for {}", id, data_hora);
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<ConsultaDetalhada>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT
                 c.id_consulta,
                 c.data_hora,
                 m.nome AS nome_medico,
                 p.nome AS nome_paciente,
                 c.observacoes,
                 c.id_medico,
                 c.id_paciente
             FROM consulta c
             JOIN medico m ON c.id_medico = m.id_medico
             JOIN paciente p ON c.id_paciente = p.id_paciente
             ORDER BY c.data_hora",
        )?;

        let consultas: Vec<ConsultaDetalhada> = stmt
            .query_map([], Self::row_to_consulta)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(consultas)
    }

    fn update(
        &self,
        id: i64,
        id_medico: i64,
        id_paciente: i64,
        data_hora: &str,
        observacoes: Option<&str>,
    ) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE consulta SET id_medico = ?1, id_paciente = ?2, data_hora = ?3, observacoes = ?4
             WHERE id_consulta = ?5",
            params![id_medico, id_paciente, data_hora, observacoes, id],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected =
            tx.execute("DELETE FROM consulta WHERE id_consulta = ?1", params![id])?;

        tx.commit()?;
        if rows_affected > 0 {
            log::info!("consulta {} deleted", id);
        }
        Ok(rows_affected > 0)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM consulta WHERE id_consulta = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, initialize_database};
    use crate::repositories::{
        MedicoRepository, PacienteRepository, SqliteMedicoRepository, SqlitePacienteRepository,
    };

    struct Fixture {
        medicos: SqliteMedicoRepository,
        pacientes: SqlitePacienteRepository,
        consultas: SqliteConsultaRepository,
    }

    fn fixture() -> Fixture {
        let pool = Arc::new(create_test_pool().unwrap());
        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();
        }
        Fixture {
            medicos: SqliteMedicoRepository::new(pool.clone()),
            pacientes: SqlitePacienteRepository::new(pool.clone()),
            consultas: SqliteConsultaRepository::new(pool),
        }
    }

    #[test]
    fn test_schedule_and_list_denormalized() {
        let f = fixture();
        let id_medico = f.medicos.add("Dr. Ana", Some("Cardiologia")).unwrap();
        let id_paciente = f.pacientes.add("Bob", Some("1990-01-01"), Some("555-0100")).unwrap();

        let id = f
            .consultas
            .add(id_medico, id_paciente, "2025-03-10 09:00", Some("checkup"))
            .unwrap();

        let consultas = f.consultas.list_all().unwrap();
        assert_eq!(
            consultas,
            vec![ConsultaDetalhada {
                id,
                data_hora: "2025-03-10 09:00".to_string(),
                nome_medico: "Dr. Ana".to_string(),
                nome_paciente: "Bob".to_string(),
                observacoes: Some("checkup".to_string()),
                id_medico,
                id_paciente,
            }]
        );
    }

    #[test]
    fn test_list_ordered_by_data_hora() {
        let f = fixture();
        let m = f.medicos.add("Dr. Ana", None).unwrap();
        let p = f.pacientes.add("Bob", None, None).unwrap();

        f.consultas.add(m, p, "2025-03-11 10:00", None).unwrap();
        f.consultas.add(m, p, "2025-03-10 09:00", None).unwrap();
        f.consultas.add(m, p, "2025-03-10 16:30", None).unwrap();

        let datas: Vec<_> = f
            .consultas
            .list_all()
            .unwrap()
            .into_iter()
            .map(|c| c.data_hora)
            .collect();
        assert_eq!(
            datas,
            vec!["2025-03-10 09:00", "2025-03-10 16:30", "2025-03-11 10:00"]
        );
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let f = fixture();
        assert!(f.consultas.add(1, 1, "2025-03-10 09:00", None).is_err());
        assert!(f.consultas.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_deleting_doctor_cascades_only_its_appointments() {
        let f = fixture();
        let ana = f.medicos.add("Dr. Ana", None).unwrap();
        let zilda = f.medicos.add("Dr. Zilda", None).unwrap();
        let bob = f.pacientes.add("Bob", None, None).unwrap();

        f.consultas.add(ana, bob, "2025-03-10 09:00", None).unwrap();
        f.consultas.add(ana, bob, "2025-03-11 09:00", None).unwrap();
        let kept = f.consultas.add(zilda, bob, "2025-03-12 09:00", None).unwrap();

        assert!(f.medicos.delete(ana).unwrap());

        let restantes = f.consultas.list_all().unwrap();
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].id, kept);
    }

    #[test]
    fn test_deleting_patient_cascades() {
        let f = fixture();
        let ana = f.medicos.add("Dr. Ana", None).unwrap();
        let bob = f.pacientes.add("Bob", None, None).unwrap();
        f.consultas.add(ana, bob, "2025-03-10 09:00", None).unwrap();

        assert!(f.pacientes.delete(bob).unwrap());
        assert!(f.consultas.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_repoints_references() {
        let f = fixture();
        let ana = f.medicos.add("Dr. Ana", None).unwrap();
        let zilda = f.medicos.add("Dr. Zilda", None).unwrap();
        let bob = f.pacientes.add("Bob", None, None).unwrap();
        let id = f.consultas.add(ana, bob, "2025-03-10 09:00", None).unwrap();

        assert!(f
            .consultas
            .update(id, zilda, bob, "2025-03-10 10:00", Some("remarcada"))
            .unwrap());

        let consultas = f.consultas.list_all().unwrap();
        assert_eq!(consultas[0].nome_medico, "Dr. Zilda");
        assert_eq!(consultas[0].data_hora, "2025-03-10 10:00");
        assert_eq!(consultas[0].observacoes.as_deref(), Some("remarcada"));
    }

    #[test]
    fn test_update_missing_returns_false() {
        let f = fixture();
        let ana = f.medicos.add("Dr. Ana", None).unwrap();
        let bob = f.pacientes.add("Bob", None, None).unwrap();

        assert!(!f.consultas.update(42, ana, bob, "2025-03-10 09:00", None).unwrap());
    }
}
