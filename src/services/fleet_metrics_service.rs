//! Métricas derivadas de la flota
//!
//! Funciones puras sobre las colecciones de vehículos e intervenciones:
//! conteos, sumas de costos y agrupaciones por mes y por tipo. No hay
//! cache; cada llamada recalcula sobre la colección completa. Las sumas de
//! costos saturan en `Decimal::MAX` en lugar de desbordar.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Intervention, InterventionStatus, InterventionType, Vehicle};

/// Máximo de tareas en la lista "Upcoming & Overdue"
pub const UPCOMING_TASK_LIMIT: usize = 4;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Orden de los grupos en las agregaciones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupOrder {
    /// Orden de primera aparición en la colección
    #[default]
    FirstSeen,
    /// Meses de enero a diciembre, tipos en orden de declaración
    Chronological,
}

impl GroupOrder {
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first-seen" | "first_seen" => Some(GroupOrder::FirstSeen),
            "chronological" => Some(GroupOrder::Chronological),
            _ => None,
        }
    }
}

/// Costo acumulado de un mes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyCost {
    pub month: &'static str,
    pub cost: Decimal,
    #[serde(skip)]
    month_number: u32,
}

/// Cantidad de intervenciones de un tipo
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeCount {
    pub intervention_type: InterventionType,
    pub count: usize,
}

/// Las cuatro cifras principales del dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardMetrics {
    pub active_vehicles: usize,
    pub overdue_tasks: usize,
    pub planned_tasks: usize,
    pub total_completed_cost: Decimal,
}

/// Vehículos que no están archivados
pub fn active_vehicle_count(vehicles: &[Vehicle]) -> usize {
    vehicles.iter().filter(|v| !v.is_archived()).count()
}

pub fn overdue_count(interventions: &[Intervention]) -> usize {
    count_with_status(interventions, InterventionStatus::Overdue)
}

pub fn planned_count(interventions: &[Intervention]) -> usize {
    count_with_status(interventions, InterventionStatus::Planned)
}

/// Intervenciones aún no completadas
pub fn pending_count(interventions: &[Intervention]) -> usize {
    interventions.iter().filter(|i| !i.is_completed()).count()
}

/// Suma de costos de las intervenciones completadas
pub fn total_completed_cost(interventions: &[Intervention]) -> Decimal {
    let costs = interventions
        .iter()
        .filter(|i| i.is_completed())
        .map(|i| i.cost);
    saturating_cost_sum(costs)
}

/// Suma de costos que satura en `Decimal::MAX`
pub fn saturating_cost_sum<I>(costs: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    costs.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn dashboard_metrics(vehicles: &[Vehicle], interventions: &[Intervention]) -> DashboardMetrics {
    DashboardMetrics {
        active_vehicles: active_vehicle_count(vehicles),
        overdue_tasks: overdue_count(interventions),
        planned_tasks: planned_count(interventions),
        total_completed_cost: total_completed_cost(interventions),
    }
}

/// Próximas tareas y atrasadas
///
/// Excluye las completadas, ordena por fecha ascendente y toma las primeras
/// [`UPCOMING_TASK_LIMIT`]. Con fechas iguales se conserva el orden de la
/// colección (`sort_by_key` es estable).
pub fn upcoming_tasks(interventions: &[Intervention]) -> Vec<&Intervention> {
    let mut pending: Vec<&Intervention> = interventions.iter().filter(|i| !i.is_completed()).collect();
    pending.sort_by_key(|i| i.date);
    pending.truncate(UPCOMING_TASK_LIMIT);
    pending
}

/// Costos agrupados por mes abreviado (`Oct`, `Nov`...)
///
/// Meses iguales de años distintos comparten grupo.
pub fn cost_by_month(interventions: &[Intervention], order: GroupOrder) -> Vec<MonthlyCost> {
    let mut groups: Vec<MonthlyCost> = Vec::new();

    for intervention in interventions {
        let month_number = intervention.date.month();
        match groups.iter_mut().find(|g| g.month_number == month_number) {
            Some(group) => group.cost = group.cost.saturating_add(intervention.cost),
            None => groups.push(MonthlyCost {
                month: MONTH_ABBREVIATIONS[month_number as usize - 1],
                cost: intervention.cost,
                month_number,
            }),
        }
    }

    if order == GroupOrder::Chronological {
        groups.sort_by_key(|g| g.month_number);
    }
    groups
}

/// Conteo de intervenciones por tipo
pub fn type_distribution(interventions: &[Intervention], order: GroupOrder) -> Vec<TypeCount> {
    let mut groups: Vec<TypeCount> = Vec::new();

    for intervention in interventions {
        match groups
            .iter_mut()
            .find(|g| g.intervention_type == intervention.intervention_type)
        {
            Some(group) => group.count += 1,
            None => groups.push(TypeCount {
                intervention_type: intervention.intervention_type,
                count: 1,
            }),
        }
    }

    if order == GroupOrder::Chronological {
        groups.sort_by_key(|g| g.intervention_type.ordinal());
    }
    groups
}

/// Buscar el vehículo de una intervención; `None` si la referencia cuelga
pub fn resolve_vehicle<'a>(vehicles: &'a [Vehicle], vehicle_id: &str) -> Option<&'a Vehicle> {
    vehicles.iter().find(|v| v.id == vehicle_id)
}

fn count_with_status(interventions: &[Intervention], status: InterventionStatus) -> usize {
    interventions.iter().filter(|i| i.status == status).count()
}
