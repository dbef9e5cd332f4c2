use tracing::debug;
use xmltree::Element;

use crate::error::{DocPropsError, Result};

use super::patch::patch_field_text;
use super::xml::{core_field_spec, element_text_content, find_first};
use super::{CoreProperties, CorePropertyField, FieldUpdates};

/// Extrae los cuatro campos de `core.xml`. Las etiquetas ausentes se leen como cadena vacía.
pub fn decode(xml_text: &str) -> Result<CoreProperties> {
    let root = parse(xml_text)?;

    let mut properties = CoreProperties::default();
    for field in CorePropertyField::ALL {
        let spec = core_field_spec(field);
        if let Some(element) = find_first(&root, &spec) {
            properties.set(field, element_text_content(element));
        } else {
            debug!(tag = field.xml_tag(), "etiqueta ausente, se usa cadena vacía");
        }
    }

    Ok(properties)
}

/// Aplica `updates` sobre el texto original y devuelve el XML resultante.
///
/// Siempre parte de `xml_text`, nunca de un árbol ya modificado. Todo lo que no sea el texto
/// de las etiquetas actualizadas se conserva byte a byte. Una actualización cuyo elemento no
/// existe en el documento se descarta: no se crean etiquetas nuevas.
pub fn encode(xml_text: &str, updates: &FieldUpdates) -> Result<String> {
    let root = parse(xml_text)?;

    for (field, _) in updates.iter() {
        if find_first(&root, &core_field_spec(field)).is_none() {
            debug!(tag = field.xml_tag(), "etiqueta ausente, actualización descartada");
        }
    }

    patch_field_text(xml_text, updates)
}

fn parse(xml_text: &str) -> Result<Element> {
    Element::parse(xml_text.as_bytes()).map_err(|e| DocPropsError::MalformedXml(e.to_string()))
}
