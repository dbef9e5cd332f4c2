//! Sesión de edición: carga un paquete, expone sus campos y genera el paquete actualizado.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core_properties::{
    self, CORE_PROPERTIES_PATH, CoreProperties, CorePropertyField, FieldUpdates,
};
use crate::error::{DocPropsError, Result};
use crate::package;
use crate::timestamp::EditableZone;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub zone: EditableZone,
}

/// Paquete cargado junto con el XML original y los campos en forma editable.
#[derive(Debug)]
struct LoadedPackage {
    archive: Vec<u8>,
    original_xml: String,
    fields: CoreProperties,
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Empty,
    Loaded(LoadedPackage),
}

#[derive(Debug, Default)]
pub struct EditSession {
    options: SessionOptions,
    state: SessionState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            state: SessionState::Empty,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Carga un paquete y devuelve sus campos en forma editable.
    ///
    /// Reemplaza cualquier sesión anterior sólo si la carga completa tiene éxito; ante un
    /// error el estado previo queda intacto.
    pub fn load(&mut self, file_bytes: impl Into<Vec<u8>>) -> Result<CoreProperties> {
        self.options.zone.validate()?;
        let archive = file_bytes.into();
        let original_xml = package::extract_entry(&archive, CORE_PROPERTIES_PATH)?;
        let mut fields = core_properties::decode(&original_xml)?;
        for field in CorePropertyField::ALL.into_iter().filter(|f| f.is_timestamp()) {
            let editable = self.options.zone.to_editable(fields.get(field))?;
            fields.set(field, editable);
        }

        info!(
            bytes = archive.len(),
            creator = fields.creator.as_str(),
            "paquete cargado"
        );

        self.state = SessionState::Loaded(LoadedPackage {
            archive,
            original_xml,
            fields: fields.clone(),
        });
        Ok(fields)
    }

    /// Genera el paquete con `edits` aplicados sobre el XML original.
    ///
    /// `edits` se superpone a los campos mostrados al cargar y los cuatro campos se escriben
    /// de vuelta. Las fechas, editadas o no, pasan por la forma editable: pierden los
    /// segundos. La sesión no cambia de estado: el llamador decide si la reinicia.
    pub fn save(&self, edits: &FieldUpdates) -> Result<Vec<u8>> {
        let SessionState::Loaded(loaded) = &self.state else {
            return Err(DocPropsError::NoActiveSession);
        };

        let mut edited = loaded.fields.clone();
        for (field, value) in edits.iter() {
            edited.set(field, value);
        }

        let mut updates = FieldUpdates::new();
        for field in CorePropertyField::ALL {
            let value = edited.get(field);
            let value = if field.is_timestamp() {
                self.options.zone.to_canonical(field, value)?
            } else {
                value.to_string()
            };
            updates.set(field, value);
        }

        let updated_xml = core_properties::encode(&loaded.original_xml, &updates)?;
        let output =
            package::replace_entry_and_repack(&loaded.archive, CORE_PROPERTIES_PATH, &updated_xml)?;

        info!(bytes = output.len(), "paquete actualizado generado");
        Ok(output)
    }

    /// Descarta el paquete cargado.
    pub fn reset(&mut self) {
        self.state = SessionState::Empty;
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SessionState::Loaded(_))
    }

    /// Campos tal y como se mostraron al cargar, en forma editable.
    pub fn fields(&self) -> Option<&CoreProperties> {
        match &self.state {
            SessionState::Loaded(loaded) => Some(&loaded.fields),
            SessionState::Empty => None,
        }
    }

    pub fn original_xml(&self) -> Option<&str> {
        match &self.state {
            SessionState::Loaded(loaded) => Some(&loaded.original_xml),
            SessionState::Empty => None,
        }
    }
}
