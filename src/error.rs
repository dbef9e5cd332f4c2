//! Errores que pueden interrumpir la carga o el guardado de un paquete.

use thiserror::Error;

use crate::core_properties::CorePropertyField;

pub type Result<T> = std::result::Result<T, DocPropsError>;

#[derive(Debug, Error)]
pub enum DocPropsError {
    /// El buffer recibido no es un ZIP legible.
    #[error("No es un documento Office válido: {0}")]
    ArchiveCorrupt(String),

    #[error("No se encontró `{path}` dentro del paquete")]
    EntryNotFound { path: String },

    #[error("Error leyendo XML de metadata: {0}")]
    MalformedXml(String),

    #[error("No hay ningún documento cargado")]
    NoActiveSession,

    #[error("Desplazamiento horario fuera de rango: {offset_seconds} s")]
    InvalidZone { offset_seconds: i32 },

    /// La fecha editada no se puede convertir a un instante ISO-8601.
    #[error("La fecha `{value}` del campo `{}` no es válida", .field.key())]
    InvalidTimestamp {
        field: CorePropertyField,
        value: String,
    },
}
