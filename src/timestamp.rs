//! Conversión entre la forma canónica (instante ISO-8601 en UTC) y la forma editable
//! (`YYYY-MM-DDTHH:MM` en hora local).
//!
//! La forma editable tiene precisión de minutos: guardar una fecha que pasó por ella
//! descarta los segundos de forma permanente.

use std::fmt;

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core_properties::CorePropertyField;
use crate::error::{DocPropsError, Result};

pub const EDITABLE_FORMAT: &str = "%Y-%m-%dT%H:%M";
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Zona horaria en la que se muestran y se interpretan las fechas editables.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditableZone {
    /// Zona horaria local de la plataforma.
    #[default]
    System,
    Fixed { offset_seconds: i32 },
}

impl EditableZone {
    pub fn utc() -> Self {
        EditableZone::Fixed { offset_seconds: 0 }
    }

    /// Rechaza un desplazamiento fijo fuera de ±24 h.
    pub fn validate(&self) -> Result<()> {
        match self {
            EditableZone::System => Ok(()),
            EditableZone::Fixed { offset_seconds } => fixed_offset(*offset_seconds).map(|_| ()),
        }
    }

    pub fn to_editable(&self, canonical: &str) -> Result<String> {
        Ok(match self {
            EditableZone::System => to_editable(canonical, &Local),
            EditableZone::Fixed { offset_seconds } => {
                to_editable(canonical, &fixed_offset(*offset_seconds)?)
            }
        })
    }

    pub fn to_canonical(&self, field: CorePropertyField, editable: &str) -> Result<String> {
        match self {
            EditableZone::System => to_canonical(field, editable, &Local),
            EditableZone::Fixed { offset_seconds } => {
                to_canonical(field, editable, &fixed_offset(*offset_seconds)?)
            }
        }
    }
}

fn fixed_offset(offset_seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(offset_seconds).ok_or(DocPropsError::InvalidZone { offset_seconds })
}

/// Convierte una fecha almacenada a su forma editable en `zone`.
///
/// Acepta instantes RFC 3339, fechas con hora sin desplazamiento (hora de `zone`) y fechas
/// sin hora (medianoche UTC). Un valor vacío sigue vacío; uno irreconocible se devuelve tal
/// cual.
pub fn to_editable<Tz: TimeZone>(canonical: &str, zone: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let value = canonical.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return instant.with_timezone(zone).format(EDITABLE_FORMAT).to_string();
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, EDITABLE_FORMAT));
    if let Ok(local) = naive {
        return local.format(EDITABLE_FORMAT).to_string();
    }

    if let Some(midnight) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Utc
            .from_utc_datetime(&midnight)
            .with_timezone(zone)
            .format(EDITABLE_FORMAT)
            .to_string();
    }

    warn!(value, "fecha no reconocida, se conserva sin convertir");
    canonical.to_string()
}

/// Convierte una fecha editable (hora de `zone`) a un instante UTC con segundos a cero.
///
/// Una hora que no existe en `zone` (salto de horario de verano) se interpreta con el
/// desplazamiento vigente antes del salto, lo que la adelanta tanto como dure el salto.
/// También acepta un instante RFC 3339 completo, que se normaliza a UTC.
pub fn to_canonical<Tz: TimeZone>(
    field: CorePropertyField,
    editable: &str,
    zone: &Tz,
) -> Result<String> {
    let value = editable.trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    let invalid = || DocPropsError::InvalidTimestamp {
        field,
        value: editable.to_string(),
    };

    if let Ok(local) = NaiveDateTime::parse_from_str(value, EDITABLE_FORMAT) {
        let instant = resolve_local(zone, &local).ok_or_else(invalid)?;
        return Ok(format_canonical(instant.with_timezone(&Utc)));
    }

    let instant = DateTime::parse_from_rfc3339(value).map_err(|_| invalid())?;
    Ok(format_canonical(instant.with_timezone(&Utc)))
}

fn resolve_local<Tz: TimeZone>(zone: &Tz, local: &NaiveDateTime) -> Option<DateTime<Tz>> {
    if let Some(instant) = zone.from_local_datetime(local).earliest() {
        return Some(instant);
    }

    let offset = (1..=96)
        .find_map(|step| {
            zone.offset_from_local_datetime(&(*local - TimeDelta::minutes(15 * step)))
                .latest()
        })?
        .fix();
    let utc = *local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    Some(zone.from_utc_datetime(&utc))
}

fn format_canonical(instant: DateTime<Utc>) -> String {
    instant.format(CANONICAL_FORMAT).to_string()
}
