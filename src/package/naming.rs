//! Nombre sugerido para el paquete generado.

use std::path::Path;

const UPDATED_MARKER: &str = "-updated";

/// Inserta `-updated` antes de la extensión: `informe.docx` pasa a `informe-updated.docx`.
pub fn updated_file_name(original: &str) -> String {
    let path = Path::new(original);
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();

    match path.extension() {
        Some(extension) if !stem.is_empty() => {
            let file_name = format!("{stem}{UPDATED_MARKER}.{}", extension.to_string_lossy());
            match path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                Some(parent) => parent.join(file_name).to_string_lossy().into_owned(),
                None => file_name,
            }
        }
        _ => format!("{original}{UPDATED_MARKER}"),
    }
}
