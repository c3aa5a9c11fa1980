// src/repositories/paciente_repository.rs
//
// Patient persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Paciente;
use crate::error::AppResult;

pub trait PacienteRepository: Send + Sync {
    /// Inserts a new patient and returns the assigned identifier.
    fn add(
        &self,
        nome: &str,
        data_nascimento: Option<&str>,
        telefone: Option<&str>,
    ) -> AppResult<i64>;
    /// Every patient, ordered by name (the natural display key).
    fn list_all(&self) -> AppResult<Vec<Paciente>>;
    /// Full replace of the mutable fields. `false` means no row matched.
    fn update(
        &self,
        id: i64,
        nome: &str,
        data_nascimento: Option<&str>,
        telefone: Option<&str>,
    ) -> AppResult<bool>;
    /// Removes the patient; the schema cascades to dependent appointments.
    /// `false` means no row matched.
    fn delete(&self, id: i64) -> AppResult<bool>;
    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqlitePacienteRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePacienteRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_paciente(row: &Row) -> Result<Paciente, rusqlite::Error> {
        Ok(Paciente {
            id: row.get("id_paciente")?,
            nome: row.get("nome")?,
            data_nascimento: row.get("data_nascimento")?,
            telefone: row.get("telefone")?,
        })
    }
}

impl PacienteRepository for SqlitePacienteRepository {
    fn add(
        &self,
        nome: &str,
        data_nascimento: Option<&str>,
        telefone: Option<&str>,
    ) -> AppResult<i64> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO paciente (nome, data_nascimento, telefone) VALUES (?1, ?2, ?3)",
            params![nome, data_nascimento, telefone],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        log::info!("paciente {} added", id);
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<Paciente>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id_paciente, nome, data_nascimento, telefone
             FROM paciente
             ORDER BY nome",
        )?;

        let pacientes: Vec<Paciente> = stmt
            .query_map([], Self::row_to_paciente)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(pacientes)
    }

    fn update(
        &self,
        id: i64,
        nome: &str,
        data_nascimento: Option<&str>,
        telefone: Option<&str>,
    ) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE paciente SET nome = ?1, data_nascimento = ?2, telefone = ?3
             WHERE id_paciente = ?4",
            params![nome, data_nascimento, telefone, id],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected =
            tx.execute("DELETE FROM paciente WHERE id_paciente = ?1", params![id])?;

        tx.commit()?;
        if rows_affected > 0 {
            log::info!("paciente {} deleted", id);
        }
        Ok(rows_affected > 0)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM paciente WHERE id_paciente = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
