//! Paquetes de prueba construidos en memoria.

use std::io::{Cursor, Read, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub(crate) const SAMPLE_CORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
                   xmlns:dc="http://purl.org/dc/elements/1.1/"
                   xmlns:dcterms="http://purl.org/dc/terms/"
                   xmlns:dcmitype="http://purl.org/dc/dcmitype/"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>Documento Demo</dc:title>
    <dc:creator>Autor Prueba</dc:creator>
    <cp:lastModifiedBy>Editor Prueba</cp:lastModifiedBy>
    <cp:revision>6</cp:revision>
    <dcterms:created xsi:type="dcterms:W3CDTF">2024-01-01T00:00:00Z</dcterms:created>
    <dcterms:modified xsi:type="dcterms:W3CDTF">2024-02-01T10:30:45Z</dcterms:modified>
</cp:coreProperties>
"#;

/// Núcleo mínimo con sólo dos de los cuatro campos presentes.
pub(crate) const PARTIAL_CORE_XML: &str = r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/"><dc:creator>Alice</dc:creator><dcterms:created>2023-01-01T00:00:00Z</dcterms:created></cp:coreProperties>"#;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>
"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>
"#;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body>
        <w:p><w:r><w:t>Documento de prueba</w:t></w:r></w:p>
    </w:body>
</w:document>
"#;

/// Crea un `.docx` mínimo en memoria mezclando entradas guardadas y comprimidas.
pub(crate) fn create_sample_package(core_xml: &str) -> Vec<u8> {
    build_package(core_xml, None)
}

/// Igual que [`create_sample_package`], con comentario de archivo ZIP.
pub(crate) fn create_commented_package(core_xml: &str, comment: &str) -> Vec<u8> {
    build_package(core_xml, Some(comment))
}

fn build_package(core_xml: &str, comment: Option<&str>) -> Vec<u8> {
    let stored = FileOptions::<'_, ()>::default().compression_method(CompressionMethod::Stored);
    let deflated =
        FileOptions::<'_, ()>::default().compression_method(CompressionMethod::Deflated);

    let entries = [
        ("[Content_Types].xml", CONTENT_TYPES, stored),
        ("_rels/.rels", RELS_XML, stored),
        ("word/document.xml", DOCUMENT_XML, deflated),
        ("docProps/core.xml", core_xml, deflated),
    ];

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    if let Some(comment) = comment {
        writer.set_comment(comment);
    }
    for (name, contents, options) in entries {
        writer
            .start_file(name, options)
            .expect("no se pudo iniciar la entrada de prueba");
        writer
            .write_all(contents.as_bytes())
            .expect("no se pudo escribir la entrada de prueba");
    }
    writer
        .finish()
        .expect("no se pudo cerrar el paquete de prueba")
        .into_inner()
}

/// Crea un paquete sin `docProps/core.xml`.
pub(crate) fn create_package_without_core() -> Vec<u8> {
    let options = FileOptions::<'_, ()>::default().compression_method(CompressionMethod::Stored);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("[Content_Types].xml", options)
        .expect("no se pudo iniciar la entrada de prueba");
    writer
        .write_all(CONTENT_TYPES.as_bytes())
        .expect("no se pudo escribir la entrada de prueba");
    writer
        .finish()
        .expect("no se pudo cerrar el paquete de prueba")
        .into_inner()
}

/// Vista cruda de una entrada: lo que debe sobrevivir intacto al reempaquetado.
#[derive(Debug, PartialEq)]
pub(crate) struct RawEntry {
    pub(crate) name: String,
    pub(crate) compression: CompressionMethod,
    pub(crate) crc32: u32,
    pub(crate) unix_mode: Option<u32>,
    pub(crate) raw_data: Vec<u8>,
}

pub(crate) fn raw_entries(package: &[u8]) -> Vec<RawEntry> {
    let mut archive = ZipArchive::new(Cursor::new(package)).expect("paquete de prueba inválido");
    (0..archive.len())
        .map(|i| {
            let mut file = archive
                .by_index_raw(i)
                .expect("no se pudo leer la entrada cruda");
            let mut raw_data = Vec::new();
            file.read_to_end(&mut raw_data)
                .expect("no se pudo leer el contenido crudo");
            RawEntry {
                name: file.name().to_string(),
                compression: file.compression(),
                crc32: file.crc32(),
                unix_mode: file.unix_mode(),
                raw_data,
            }
        })
        .collect()
}
