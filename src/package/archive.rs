use std::io::{Cursor, Read, Write};

use tracing::debug;
use zip::result::ZipError;
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::{DocPropsError, Result};

/// Lee una entrada del paquete como texto UTF-8.
pub fn extract_entry(archive: &[u8], entry_path: &str) -> Result<String> {
    let mut archive = open_archive(archive)?;

    let mut file = archive
        .by_name(entry_path)
        .map_err(|e| map_lookup_error(e, entry_path))?;

    let mut contents = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut contents)
        .map_err(|e| DocPropsError::ArchiveCorrupt(format!("Error leyendo `{entry_path}`: {e}")))?;

    debug!(entry = entry_path, bytes = contents.len(), "entrada extraída");

    String::from_utf8(contents)
        .map_err(|e| DocPropsError::MalformedXml(format!("`{entry_path}` no es UTF-8: {e}")))
}

/// Genera un paquete nuevo idéntico a `archive` salvo por el contenido de `entry_path`.
///
/// Las demás entradas se copian en crudo: mismos bytes comprimidos, CRC y cabeceras, en el
/// mismo orden, y el comentario del ZIP se conserva. La entrada sustituida conserva su método de compresión, fecha y permisos.
pub fn replace_entry_and_repack(
    archive: &[u8],
    entry_path: &str,
    new_contents: &str,
) -> Result<Vec<u8>> {
    let mut archive = open_archive(archive)?;

    if !archive.file_names().any(|name| name == entry_path) {
        return Err(DocPropsError::EntryNotFound {
            path: entry_path.to_string(),
        });
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.set_raw_comment(archive.comment().to_vec().into());

    for i in 0..archive.len() {
        let file = archive
            .by_index_raw(i)
            .map_err(|e| corrupt("Error leyendo archivo del ZIP", e))?;

        if file.name() != entry_path {
            debug!(entry = file.name(), "copiando entrada sin cambios");
            writer
                .raw_copy_file(file)
                .map_err(|e| corrupt("Error copiando entrada", e))?;
            continue;
        }

        let mut options =
            FileOptions::<'_, ()>::default().compression_method(file.compression());
        if let Some(mode) = file.unix_mode() {
            options = options.unix_permissions(mode);
        }
        if let Some(time) = file.last_modified() {
            options = options.last_modified_time(time);
        }
        let name = file.name().to_string();

        debug!(entry = name.as_str(), bytes = new_contents.len(), "reescribiendo entrada");
        writer
            .start_file(name, options)
            .map_err(|e| corrupt("Error escribiendo contenido", e))?;
        writer
            .write_all(new_contents.as_bytes())
            .map_err(|e| DocPropsError::ArchiveCorrupt(format!("Error escribiendo contenido: {e}")))?;
    }

    let output = writer
        .finish()
        .map_err(|e| corrupt("Error finalizando archivo", e))?;

    Ok(output.into_inner())
}

fn open_archive(bytes: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>> {
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| corrupt("No se pudo abrir el paquete", e))
}

fn map_lookup_error(error: ZipError, entry_path: &str) -> DocPropsError {
    match error {
        ZipError::FileNotFound => DocPropsError::EntryNotFound {
            path: entry_path.to_string(),
        },
        other => corrupt("No se pudo acceder a la entrada", other),
    }
}

fn corrupt(context: &str, error: ZipError) -> DocPropsError {
    DocPropsError::ArchiveCorrupt(format!("{context}: {error}"))
}
