//! Acceso a los paquetes Office empaquetados en ZIP.

mod archive;
mod naming;

pub use archive::{extract_entry, replace_entry_and_repack};
pub use naming::updated_file_name;
