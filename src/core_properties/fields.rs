use serde::{Deserialize, Serialize};

/// Los cuatro campos editables de `core.xml`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CorePropertyField {
    Creator,
    LastModifiedBy,
    Created,
    Modified,
}

impl CorePropertyField {
    pub const ALL: [CorePropertyField; 4] = [
        CorePropertyField::Creator,
        CorePropertyField::LastModifiedBy,
        CorePropertyField::Created,
        CorePropertyField::Modified,
    ];

    /// Clave con la que el campo viaja hacia la interfaz.
    pub fn key(self) -> &'static str {
        match self {
            CorePropertyField::Creator => "creator",
            CorePropertyField::LastModifiedBy => "lastModifiedBy",
            CorePropertyField::Created => "created",
            CorePropertyField::Modified => "modified",
        }
    }

    /// Etiqueta tal y como aparece escrita en `core.xml`.
    pub fn xml_tag(self) -> &'static str {
        match self {
            CorePropertyField::Creator => "dc:creator",
            CorePropertyField::LastModifiedBy => "cp:lastModifiedBy",
            CorePropertyField::Created => "dcterms:created",
            CorePropertyField::Modified => "dcterms:modified",
        }
    }

    pub fn is_timestamp(self) -> bool {
        matches!(self, CorePropertyField::Created | CorePropertyField::Modified)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Valores de los cuatro campos. Un campo ausente en el documento queda como cadena vacía.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreProperties {
    pub creator: String,
    pub last_modified_by: String,
    pub created: String,
    pub modified: String,
}

impl CoreProperties {
    pub fn get(&self, field: CorePropertyField) -> &str {
        match field {
            CorePropertyField::Creator => &self.creator,
            CorePropertyField::LastModifiedBy => &self.last_modified_by,
            CorePropertyField::Created => &self.created,
            CorePropertyField::Modified => &self.modified,
        }
    }

    pub fn set(&mut self, field: CorePropertyField, value: impl Into<String>) {
        let slot = match field {
            CorePropertyField::Creator => &mut self.creator,
            CorePropertyField::LastModifiedBy => &mut self.last_modified_by,
            CorePropertyField::Created => &mut self.created,
            CorePropertyField::Modified => &mut self.modified,
        };
        *slot = value.into();
    }
}

/// Cambios parciales: sólo los campos con valor se escriben de vuelta.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl FieldUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: CorePropertyField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: CorePropertyField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: CorePropertyField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Campos presentes, en el orden de [`CorePropertyField::ALL`].
    pub fn iter(&self) -> impl Iterator<Item = (CorePropertyField, &str)> + '_ {
        CorePropertyField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    fn slot(&self, field: CorePropertyField) -> &Option<String> {
        match field {
            CorePropertyField::Creator => &self.creator,
            CorePropertyField::LastModifiedBy => &self.last_modified_by,
            CorePropertyField::Created => &self.created,
            CorePropertyField::Modified => &self.modified,
        }
    }

    fn slot_mut(&mut self, field: CorePropertyField) -> &mut Option<String> {
        match field {
            CorePropertyField::Creator => &mut self.creator,
            CorePropertyField::LastModifiedBy => &mut self.last_modified_by,
            CorePropertyField::Created => &mut self.created,
            CorePropertyField::Modified => &mut self.modified,
        }
    }
}

/// El formulario completo se envía como actualización de los cuatro campos.
impl From<CoreProperties> for FieldUpdates {
    fn from(properties: CoreProperties) -> Self {
        Self {
            creator: Some(properties.creator),
            last_modified_by: Some(properties.last_modified_by),
            created: Some(properties.created),
            modified: Some(properties.modified),
        }
    }
}
