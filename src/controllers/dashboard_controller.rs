use chrono::NaiveDate;

use crate::dto::{DashboardView, FleetHealthEntry, MetricCard, UpcomingTask};
use crate::models::Tone;
use crate::repositories::FleetRepository;
use crate::services::{dashboard_metrics, pending_count, resolve_vehicle, upcoming_tasks};
use crate::utils::format::{format_long_date, format_money, format_short_date};

/// Vehículos mostrados en "Fleet Health"
pub const FLEET_HEALTH_LIMIT: usize = 3;

pub struct DashboardController<'a> {
    repository: &'a FleetRepository,
    today: NaiveDate,
}

impl<'a> DashboardController<'a> {
    pub fn new(repository: &'a FleetRepository, today: NaiveDate) -> Self {
        Self { repository, today }
    }

    pub fn view(&self) -> DashboardView {
        let vehicles = self.repository.vehicles();
        let interventions = self.repository.interventions();
        let metrics = dashboard_metrics(vehicles, interventions);

        let metric_cards = vec![
            MetricCard {
                title: "Active Vehicles".to_string(),
                value: metrics.active_vehicles.to_string(),
                trend: None,
                tone: Tone::Primary,
            },
            MetricCard {
                title: "Attention Needed".to_string(),
                value: metrics.overdue_tasks.to_string(),
                trend: Some("Action required".to_string()),
                tone: Tone::Danger,
            },
            MetricCard {
                title: "Planned Jobs".to_string(),
                value: metrics.planned_tasks.to_string(),
                trend: None,
                tone: Tone::Warning,
            },
            MetricCard {
                title: "YTD Spend".to_string(),
                value: format_money(metrics.total_completed_cost),
                trend: None,
                tone: Tone::Success,
            },
        ];

        let upcoming = upcoming_tasks(interventions)
            .into_iter()
            .map(|task| UpcomingTask {
                intervention_id: task.id.clone(),
                intervention_type: task.intervention_type,
                vehicle_name: resolve_vehicle(vehicles, &task.vehicle_id).map(|v| v.name.clone()),
                date: task.date,
                date_label: format_short_date(task.date),
                status: task.status,
                tone: task.status.tone(),
            })
            .collect();

        let empty_message = if pending_count(interventions) == 0 {
            Some("No pending tasks. Great job!".to_string())
        } else {
            None
        };

        let fleet_health = vehicles
            .iter()
            .take(FLEET_HEALTH_LIMIT)
            .map(|vehicle| {
                let (label, tone) = vehicle.status.health();
                FleetHealthEntry {
                    vehicle_id: vehicle.id.clone(),
                    name: vehicle.name.clone(),
                    image: vehicle.image.clone(),
                    label: label.to_string(),
                    tone,
                    health_percent: vehicle.status.health_percent(),
                }
            })
            .collect();

        DashboardView {
            title: "Overview".to_string(),
            subtitle: "Welcome back. Here's what's happening with your fleet today.".to_string(),
            date_label: format_long_date(self.today),
            metrics: metric_cards,
            upcoming,
            empty_message,
            fleet_health,
        }
    }
}
