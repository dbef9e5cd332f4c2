use xmltree::{Element, XMLNode};

use super::CorePropertyField;

/// Describe cómo localizar un campo en el XML: prefijo literal más nombre local.
///
/// No se resuelven URIs de espacio de nombres; un documento que use otro prefijo para el
/// mismo espacio de nombres no se reconoce.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FieldSpec<'a> {
    pub(crate) prefix: &'a str,
    pub(crate) local_name: &'a str,
}

pub(crate) fn core_field_spec(field: CorePropertyField) -> FieldSpec<'static> {
    let (prefix, local_name) = field
        .xml_tag()
        .split_once(':')
        .unwrap_or(("", field.xml_tag()));
    FieldSpec { prefix, local_name }
}

pub(crate) fn element_matches(element: &Element, spec: &FieldSpec<'_>) -> bool {
    element.name == spec.local_name && element.prefix.as_deref().unwrap_or("") == spec.prefix
}

/// Primer elemento que coincide, recorriendo el árbol en orden de documento.
pub(crate) fn find_first<'e>(element: &'e Element, spec: &FieldSpec<'_>) -> Option<&'e Element> {
    if element_matches(element, spec) {
        return Some(element);
    }
    element.children.iter().find_map(|node| match node {
        XMLNode::Element(child) => find_first(child, spec),
        _ => None,
    })
}

/// Texto de todos los descendientes, sin recortar espacios.
pub(crate) fn element_text_content(element: &Element) -> String {
    let mut content = String::new();
    collect_text(element, &mut content);
    content
}

fn collect_text(element: &Element, content: &mut String) {
    for node in &element.children {
        match node {
            XMLNode::Text(text) | XMLNode::CData(text) => content.push_str(text),
            XMLNode::Element(child) => collect_text(child, content),
            _ => {}
        }
    }
}
