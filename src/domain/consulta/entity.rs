use serde::{Deserialize, Serialize};

/// An appointment row as every screen consumes it: denormalized through
/// the doctor and patient joins, since no screen displays raw foreign
/// keys. The identifiers ride along so selection can resolve back to the
/// picker labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultaDetalhada {
    /// Surrogate identifier, assigned by the storage layer
    pub id: i64,

    /// Canonical format: YYYY-MM-DD HH:MM, validated before any write
    pub data_hora: String,

    /// Referenced doctor's name at query time
    pub nome_medico: String,

    /// Referenced patient's name at query time
    pub nome_paciente: String,

    /// Free-text notes
    pub observacoes: Option<String>,

    /// Doctor reference, always resolves while the row exists (cascade)
    pub id_medico: i64,

    /// Patient reference, always resolves while the row exists (cascade)
    pub id_paciente: i64,
}
