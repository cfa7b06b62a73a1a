//! Modelo de Intervention
//!
//! Una intervención es un evento de mantenimiento (servicio, reparación,
//! inspección) asociado a un vehículo por `vehicle_id`. La referencia no se
//! valida: un id colgante simplemente no resuelve.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::tone::Tone;

/// Tipo de intervención
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InterventionType {
    #[serde(rename = "Oil Change")]
    OilChange,
    #[serde(rename = "Tire Rotation")]
    TireRotation,
    #[serde(rename = "Brakes")]
    Brakes,
    #[serde(rename = "Inspection")]
    Inspection,
    #[serde(rename = "General Repair")]
    GeneralRepair,
}

impl InterventionType {
    /// Todos los tipos en orden de declaración
    pub const ALL: [InterventionType; 5] = [
        InterventionType::OilChange,
        InterventionType::TireRotation,
        InterventionType::Brakes,
        InterventionType::Inspection,
        InterventionType::GeneralRepair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionType::OilChange => "Oil Change",
            InterventionType::TireRotation => "Tire Rotation",
            InterventionType::Brakes => "Brakes",
            InterventionType::Inspection => "Inspection",
            InterventionType::GeneralRepair => "General Repair",
        }
    }

    /// Posición en `ALL`
    pub fn ordinal(&self) -> usize {
        match self {
            InterventionType::OilChange => 0,
            InterventionType::TireRotation => 1,
            InterventionType::Brakes => 2,
            InterventionType::Inspection => 3,
            InterventionType::GeneralRepair => 4,
        }
    }
}

impl fmt::Display for InterventionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estado de la intervención
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InterventionStatus {
    Planned,
    Completed,
    Overdue,
}

impl InterventionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterventionStatus::Planned => "planned",
            InterventionStatus::Completed => "completed",
            InterventionStatus::Overdue => "overdue",
        }
    }

    /// Tono en el dashboard y el registro de mantenimiento
    pub fn tone(&self) -> Tone {
        match self {
            InterventionStatus::Completed => Tone::Success,
            InterventionStatus::Overdue => Tone::Danger,
            InterventionStatus::Planned => Tone::Warning,
        }
    }

    /// Tono en el calendario, donde lo planificado usa el color primario
    pub fn calendar_tone(&self) -> Tone {
        match self {
            InterventionStatus::Completed => Tone::Success,
            InterventionStatus::Overdue => Tone::Danger,
            InterventionStatus::Planned => Tone::Primary,
        }
    }
}

/// Intervención de mantenimiento
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    pub id: String,
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub intervention_type: InterventionType,
    pub date: NaiveDate,
    pub cost: Decimal,
    pub status: InterventionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Intervention {
    pub fn is_completed(&self) -> bool {
        self.status == InterventionStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intervention_deserialize() {
        let raw = r#"{
            "id": "i7",
            "vehicleId": "v3",
            "type": "Tire Rotation",
            "date": "2023-08-01",
            "cost": 95.5,
            "status": "overdue",
            "notes": "Front left worn"
        }"#;

        let intervention: Intervention = serde_json::from_str(raw).unwrap();
        assert_eq!(intervention.intervention_type, InterventionType::TireRotation);
        assert_eq!(intervention.status, InterventionStatus::Overdue);
        assert_eq!(intervention.cost, Decimal::new(955, 1));
        assert_eq!(intervention.notes.as_deref(), Some("Front left worn"));
        assert!(!intervention.is_completed());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let raw = r#"{"id":"x","vehicleId":"v1","type":"Car Wash","date":"2023-08-01","cost":10,"status":"planned"}"#;
        assert!(serde_json::from_str::<Intervention>(raw).is_err());
    }

    #[test]
    fn test_ordinals_match_declaration_order() {
        for (index, intervention_type) in InterventionType::ALL.iter().enumerate() {
            assert_eq!(intervention_type.ordinal(), index);
        }
        assert_eq!(InterventionType::GeneralRepair.to_string(), "General Repair");
    }

    #[test]
    fn test_status_tones() {
        assert_eq!(InterventionStatus::Planned.tone(), Tone::Warning);
        assert_eq!(InterventionStatus::Planned.calendar_tone(), Tone::Primary);
        assert_eq!(InterventionStatus::Overdue.tone(), Tone::Danger);
        assert_eq!(InterventionStatus::Completed.calendar_tone(), Tone::Success);
    }
}
