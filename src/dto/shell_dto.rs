use serde::Serialize;

use super::{CalendarView, DashboardView, MaintenanceLogView, SettingsView, StatsView, VehiclesView};
use crate::models::{Icon, ViewId};

// Entrada del menú lateral
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavEntry {
    pub view: ViewId,
    pub label: String,
    pub icon: Icon,
    pub active: bool,
}

// Contenido de la vista activa
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewContent {
    Dashboard(DashboardView),
    Calendar(CalendarView),
    Vehicles(VehiclesView),
    Interventions(MaintenanceLogView),
    Stats(StatsView),
    Settings(SettingsView),
}

// Página completa: chrome + vista activa
#[derive(Debug, Clone, Serialize)]
pub struct ShellPage {
    pub brand: String,
    pub user_name: String,
    pub user_initials: String,
    pub nav: Vec<NavEntry>,
    pub active_view: ViewId,
    pub content: ViewContent,
}
