//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su estado. Los nombres de campo
//! serializados usan camelCase, igual que los datos mock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tone::Tone;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    Active,
    Archived,
    ServiceNeeded,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Archived => "archived",
            VehicleStatus::ServiceNeeded => "service-needed",
        }
    }

    /// Badge de la tarjeta del inventario
    pub fn badge(&self) -> (&'static str, Tone) {
        match self {
            VehicleStatus::Active => ("Active", Tone::Success),
            VehicleStatus::ServiceNeeded => ("Service Due", Tone::Danger),
            VehicleStatus::Archived => ("Archived", Tone::Neutral),
        }
    }

    /// Etiqueta y tono del panel "Fleet Health"
    pub fn health(&self) -> (&'static str, Tone) {
        match self {
            VehicleStatus::Active => ("Healthy", Tone::Success),
            VehicleStatus::ServiceNeeded => ("Service", Tone::Danger),
            VehicleStatus::Archived => ("Service", Tone::Neutral),
        }
    }

    /// Porcentaje de la barra de salud
    pub fn health_percent(&self) -> u8 {
        match self {
            VehicleStatus::ServiceNeeded => 90,
            VehicleStatus::Active | VehicleStatus::Archived => 100,
        }
    }
}

/// Vehicle principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub model: String,
    pub year: u16,
    pub license_plate: String,
    pub mileage: u32,
    pub status: VehicleStatus,
    pub next_service_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Vehicle {
    pub fn is_archived(&self) -> bool {
        self.status == VehicleStatus::Archived
    }

    /// Primera palabra del nombre, usada en las entradas del calendario
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}
