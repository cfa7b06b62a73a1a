use serde::Serialize;

use crate::models::Tone;

// Badge de estado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

// Tarjeta del inventario de vehículos
#[derive(Debug, Clone, Serialize)]
pub struct VehicleCard {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub license_plate: String,
    pub badge: StatusBadge,
    pub mileage_label: String,
    pub next_service_label: String,
    pub image: Option<String>,
}

// Vista "Vehicles"
#[derive(Debug, Clone, Serialize)]
pub struct VehiclesView {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<VehicleCard>,
}
