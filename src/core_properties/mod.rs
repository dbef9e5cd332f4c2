//! Lectura y escritura de los campos principales de `docProps/core.xml`.

mod codec;
mod fields;
mod patch;
mod xml;

pub use codec::{decode, encode};
pub use fields::{CoreProperties, CorePropertyField, FieldUpdates};

/// Ruta de la entrada de propiedades principales dentro de cualquier paquete OOXML.
pub const CORE_PROPERTIES_PATH: &str = "docProps/core.xml";
