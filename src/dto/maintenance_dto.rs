use serde::Serialize;

use crate::models::{InterventionStatus, InterventionType, Tone};

// Fila del registro de mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceRow {
    pub id: String,
    pub date_label: String,
    pub vehicle_name: Option<String>,
    pub vehicle_image: Option<String>,
    pub intervention_type: InterventionType,
    pub cost_label: String,
    pub status: InterventionStatus,
    pub tone: Tone,
    pub notes: Option<String>,
}

// Vista "Maintenance Logs"
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceLogView {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<MaintenanceRow>,
}
