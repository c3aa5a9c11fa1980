pub mod entity;
pub mod invariants;

pub use entity::ConsultaDetalhada;
pub use invariants::{validate_consulta, validate_data_hora, FORMATO_DATA_HORA};
