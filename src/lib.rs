//! Edición de las propiedades principales (`docProps/core.xml`) de paquetes Office.
//!
//! El flujo completo vive en [`EditSession`]: cargar el paquete, mostrar los campos en
//! forma editable y generar un paquete nuevo con los cambios aplicados.

pub mod core_properties;
pub mod error;
pub mod package;
pub mod session;
pub mod timestamp;

#[cfg(test)]
mod test_support;

pub use core_properties::{CoreProperties, CorePropertyField, FieldUpdates};
pub use error::{DocPropsError, Result};
pub use package::updated_file_name;
pub use session::{EditSession, SessionOptions};
pub use timestamp::EditableZone;
