use crate::dto::{MaintenanceLogView, MaintenanceRow};
use crate::repositories::FleetRepository;
use crate::services::resolve_vehicle;
use crate::utils::format::{format_money, format_short_date};

pub struct MaintenanceController<'a> {
    repository: &'a FleetRepository,
}

impl<'a> MaintenanceController<'a> {
    pub fn new(repository: &'a FleetRepository) -> Self {
        Self { repository }
    }

    /// Una fila por intervención, en el orden de la colección
    pub fn view(&self) -> MaintenanceLogView {
        let vehicles = self.repository.vehicles();

        let rows = self
            .repository
            .interventions()
            .iter()
            .map(|task| {
                let vehicle = resolve_vehicle(vehicles, &task.vehicle_id);
                MaintenanceRow {
                    id: task.id.clone(),
                    date_label: format_short_date(task.date),
                    vehicle_name: vehicle.map(|v| v.name.clone()),
                    vehicle_image: vehicle.and_then(|v| v.image.clone()),
                    intervention_type: task.intervention_type,
                    cost_label: format_money(task.cost),
                    status: task.status,
                    tone: task.status.tone(),
                    notes: task.notes.clone(),
                }
            })
            .collect();

        MaintenanceLogView {
            title: "Maintenance Logs".to_string(),
            subtitle: "History of all interventions and services.".to_string(),
            rows,
        }
    }
}
