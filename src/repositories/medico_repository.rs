// src/repositories/medico_repository.rs
//
// Doctor persistence

use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Medico;
use crate::error::AppResult;

pub trait MedicoRepository: Send + Sync {
    /// Inserts a new doctor and returns the assigned identifier.
    fn add(&self, nome: &str, especialidade: Option<&str>) -> AppResult<i64>;
    /// Every doctor, ordered by name (the natural display key).
    fn list_all(&self) -> AppResult<Vec<Medico>>;
    /// Full replace of the mutable fields. `false` means no row matched.
    fn update(&self, id: i64, nome: &str, especialidade: Option<&str>) -> AppResult<bool>;
    /// Removes the doctor; the schema cascades to dependent appointments.
    /// `false` means no row matched.
    fn delete(&self, id: i64) -> AppResult<bool>;
    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteMedicoRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMedicoRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Medico - returns rusqlite::Error for query_map compatibility
    fn row_to_medico(row: &Row) -> Result<Medico, rusqlite::Error> {
        Ok(Medico {
            id: row.get("id_medico")?,
            nome: row.get("nome")?,
            especialidade: row.get("especialidade")?,
        })
    }
}

impl MedicoRepository for SqliteMedicoRepository {
    fn add(&self, nome: &str, especialidade: Option<&str>) -> AppResult<i64> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO medico (nome, especialidade) VALUES (?1, ?2)",
            params![nome, especialidade],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;
        log::info!("medico {} added", id);
        Ok(id)
    }

    fn list_all(&self) -> AppResult<Vec<Medico>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id_medico, nome, especialidade
             FROM medico
             ORDER BY nome",
        )?;

        let medicos: Vec<Medico> = stmt
            .query_map([], Self::row_to_medico)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(medicos)
    }

    fn update(&self, id: i64, nome: &str, especialidade: Option<&str>) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE medico SET nome = ?1, especialidade = ?2 WHERE id_medico = ?3",
            params![nome, especialidade, id],
        )?;

        tx.commit()?;
        Ok(rows_affected > 0)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute("DELETE FROM medico WHERE id_medico = ?1", params![id])?;

        tx.commit()?;
        if rows_affected > 0 {
            log::info!("medico {} deleted", id);
        }
        Ok(rows_affected > 0)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM medico WHERE id_medico = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
