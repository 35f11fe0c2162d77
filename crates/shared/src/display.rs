//! Lookup tables and formatting helpers that turn wire codes into display text.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::domain::{PriorityCode, ProductStatus, StatusCode, NO_DEADLINE};

const UNASSIGNED_SENTINELS: [&str; 5] = [
    "sin operario",
    "sin asignar",
    "no asignado",
    "null",
    "undefined",
];

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Returns true when the free-text assigned-operator field names a real
/// operator rather than one of the "nobody assigned" sentinels.
pub fn has_operator_assigned(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    !UNASSIGNED_SENTINELS.contains(&lower.as_str())
}

impl StatusCode {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InPicking => "in-progress",
            Self::Picked => "picked",
            Self::Packing => "packing",
            Self::Ready => "ready",
            Self::Shipped => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(_) => "pending",
        }
    }
}

impl PriorityCode {
    pub fn severity(&self) -> &'static str {
        match self {
            Self::High | Self::Urgent => "high",
            Self::Normal => "medium",
            Self::Low => "low",
            Self::Other(_) => "medium",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::High => "ALTA PRIORIDAD",
            Self::Urgent => "URGENTE",
            Self::Normal => "PRIORIDAD MEDIA",
            Self::Low => "PRIORIDAD BAJA",
            Self::Other(raw) => raw,
        }
    }
}

impl ProductStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &'static str {
        if self.is_completed() {
            "Completado"
        } else {
            "Pendiente"
        }
    }
}

/// Renders a backend timestamp as a Spanish long date, e.g.
/// `5 de marzo de 2025, 14:30`. Empty input, the no-deadline placeholder and
/// anything that does not parse come back unchanged.
pub fn format_date(value: &str) -> String {
    if value.is_empty() || value == NO_DEADLINE {
        return value.to_string();
    }

    match parse_timestamp(value.trim()) {
        Some(parsed) => {
            let month = MONTHS_ES[parsed.date().month0() as usize];
            format!(
                "{} de {} de {}, {:02}:{:02}",
                parsed.date().day(),
                month,
                parsed.date().year(),
                parsed.hour(),
                parsed.minute()
            )
        }
        None => value.to_string(),
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
