use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{InterventionStatus, InterventionType, Tone};

// Tarjeta de métrica
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub trend: Option<String>,
    pub tone: Tone,
}

// Entrada de "Upcoming & Overdue"; sin nombre si el vehículo no existe
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingTask {
    pub intervention_id: String,
    pub intervention_type: InterventionType,
    pub vehicle_name: Option<String>,
    pub date: NaiveDate,
    pub date_label: String,
    pub status: InterventionStatus,
    pub tone: Tone,
}

// Entrada de "Fleet Health"
#[derive(Debug, Clone, Serialize)]
pub struct FleetHealthEntry {
    pub vehicle_id: String,
    pub name: String,
    pub image: Option<String>,
    pub label: String,
    pub tone: Tone,
    pub health_percent: u8,
}

// Vista "Overview"
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub date_label: String,
    pub metrics: Vec<MetricCard>,
    pub upcoming: Vec<UpcomingTask>,
    pub empty_message: Option<String>,
    pub fleet_health: Vec<FleetHealthEntry>,
}
