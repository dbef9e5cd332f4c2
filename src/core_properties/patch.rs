use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::error::{DocPropsError, Result};

use super::{CorePropertyField, FieldUpdates};

/// Reescribe el texto de la primera aparición de cada etiqueta con actualización.
///
/// Trabaja a nivel de eventos: declaración, atributos, espacios de nombres, comentarios y
/// espacios en blanco pasan sin cambios. El contenido completo del elemento elegido se
/// sustituye por un único nodo de texto (vacío si el valor es vacío).
pub(crate) fn patch_field_text(xml_text: &str, updates: &FieldUpdates) -> Result<String> {
    let mut reader = Reader::from_str(xml_text);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Vec::with_capacity(xml_text.len() + 64));

    let mut patched: Vec<CorePropertyField> = Vec::new();
    // Campo en sustitución y profundidad dentro de él.
    let mut replacing: Option<(CorePropertyField, usize)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DocPropsError::MalformedXml(e.to_string()))?;

        if let Some((field, depth)) = replacing {
            match event {
                Event::Start(_) => replacing = Some((field, depth + 1)),
                Event::End(end) if depth == 0 => {
                    write(&mut writer, Event::End(end))?;
                    replacing = None;
                }
                Event::End(_) => replacing = Some((field, depth - 1)),
                Event::Eof => {
                    return Err(DocPropsError::MalformedXml(format!(
                        "`{}` sin cerrar",
                        field.xml_tag()
                    )));
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Eof => break,
            Event::Start(start) => match pending_update(&start, updates, &patched) {
                Some((field, value)) => {
                    debug!(tag = field.xml_tag(), "sustituyendo texto");
                    patched.push(field);
                    write(&mut writer, Event::Start(start))?;
                    if !value.is_empty() {
                        write(&mut writer, Event::Text(BytesText::new(value)))?;
                    }
                    replacing = Some((field, 0));
                }
                None => write(&mut writer, Event::Start(start))?,
            },
            Event::Empty(start) => match pending_update(&start, updates, &patched) {
                Some((field, value)) if !value.is_empty() => {
                    debug!(tag = field.xml_tag(), "completando elemento vacío");
                    patched.push(field);
                    write(&mut writer, Event::Start(start))?;
                    write(&mut writer, Event::Text(BytesText::new(value)))?;
                    write(&mut writer, Event::End(BytesEnd::new(field.xml_tag())))?;
                }
                Some((field, _)) => {
                    patched.push(field);
                    write(&mut writer, Event::Empty(start))?;
                }
                None => write(&mut writer, Event::Empty(start))?,
            },
            other => write(&mut writer, other)?,
        }
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| DocPropsError::MalformedXml(format!("XML generado no es UTF-8: {e}")))
}

/// Actualización pendiente cuya etiqueta coincide literalmente con `start`.
fn pending_update<'u>(
    start: &BytesStart<'_>,
    updates: &'u FieldUpdates,
    patched: &[CorePropertyField],
) -> Option<(CorePropertyField, &'u str)> {
    updates.iter().find(|(field, _)| {
        !patched.contains(field) && start.name().as_ref() == field.xml_tag().as_bytes()
    })
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| DocPropsError::MalformedXml(format!("Error escribiendo XML: {e}")))
}
